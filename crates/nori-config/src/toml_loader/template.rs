//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Nori Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.
# NORI_API_URL, NORI_API_KEY, NORI_USER_ID and NORI_STUDIO_ID override
# the matching keys below.

[backend]
# url = "https://example.execute-api.eu-west-1.amazonaws.com/prod/chat"
# api_key = ""           # sent as x-api-key when set
# timeout_secs = 60      # 1-600

[identity]
# user_id = "userA"
# studio_id = "1001"
# require_studio_id = true

[conversation]
# suggestions = ["Goal: build muscle", "Goal: lose weight", "Improve my sleep/energy"]
# max_history_pairs = 6        # 1-50
# max_message_chars = 3000     # 1-100000
# record_transport_failures = false

[logging]
# level = "INFO"         # DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
