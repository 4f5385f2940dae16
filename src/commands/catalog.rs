use crate::catalog::{options_for, settings_for, Tab};
use crate::config::DisplayConfig;
use crate::formatting::{format_header, label, option_label, tab_label};
use crate::strings::StringResources;

/// Render every tab, its settings and their options as plain text
pub fn format_catalog(display: &DisplayConfig, strings: &impl StringResources) -> String {
    let mut output = String::new();

    for (i, tab) in Tab::ALL.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        output.push_str(&format_header(&tab_label(*tab, strings), true, display));

        let settings = settings_for(*tab);
        if settings.is_empty() {
            output.push_str(&format!("  {}\n", strings.resolve("ui.empty_list")));
            continue;
        }
        for setting in settings {
            output.push_str(&format!("  {} ({})\n", label(*setting, strings), setting.id()));
            for choice in options_for(*setting) {
                output.push_str(&format!(
                    "    {:<16} {}\n",
                    option_label(choice, strings),
                    choice.id()
                ));
            }
        }
    }
    output
}

pub fn run(display: &DisplayConfig, strings: &impl StringResources) {
    print!("{}", format_catalog(display, strings));
}
