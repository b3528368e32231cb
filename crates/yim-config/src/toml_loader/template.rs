//! Default config file contents.

pub(super) fn default_config_toml() -> &'static str {
    r##"# YimMenu launcher configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[window]
# width = 900            # 320-7680
# height = 600           # 240-4320
# resizable = true
# centered = true

[webview]
# devtools = false
# transparent = false

[logging]
# level = "INFO"         # DEBUG, INFO, WARNING, ERROR
"##
}
