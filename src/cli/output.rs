//! Output formatting utilities

use crate::infrastructure::PreferencesFile;

/// Format all preferences as `key = value` lines
pub fn format_preferences(prefs: &PreferencesFile) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "journals-dir = {}\n",
        prefs.journals_dir.as_deref().unwrap_or("")
    ));
    output.push_str(&format!(
        "use-fjournal-field = {}\n",
        prefs.use_fjournal_field
    ));
    output.push_str(&format!("created = {}\n", prefs.created.to_rfc3339()));
    output.push_str("external-lists:\n");
    for list in &prefs.external_journal_lists {
        output.push_str(&format!("  {}\n", list));
    }
    output
}

/// Format external journal lists, one per line
pub fn format_external_lists(lists: &[String]) -> String {
    if lists.is_empty() {
        return "No external journal lists".to_string();
    }

    let mut output = String::new();
    for list in lists {
        output.push_str(&format!("{}\n", list));
    }
    output
}
