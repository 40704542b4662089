/// What the user is asking for, detected from their message text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    ListMonitors,
    Incidents,
    Overview,
}

/// Classify a chat message by keyword sniffing.
///
/// Monitor-keywords are checked before incident-keywords, so a message
/// containing both resolves to `ListMonitors`.
pub fn classify(message: &str) -> Intent {
    let lower = message.to_lowercase();

    if ["monitor", "list", "show"].iter().any(|k| lower.contains(k)) {
        Intent::ListMonitors
    } else if ["incident", "alert", "problem"].iter().any(|k| lower.contains(k)) {
        Intent::Incidents
    } else {
        Intent::Overview
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monitor_keywords_select_list() {
        assert_eq!(classify("show me my monitors"), Intent::ListMonitors);
        assert_eq!(classify("LIST everything"), Intent::ListMonitors);
        assert_eq!(classify("Show status"), Intent::ListMonitors);
    }

    #[test]
    fn incident_keywords_select_incidents() {
        assert_eq!(classify("any incidents?"), Intent::Incidents);
        assert_eq!(classify("Was there an ALERT today"), Intent::Incidents);
        assert_eq!(classify("is there a problem"), Intent::Incidents);
    }

    #[test]
    fn monitor_keywords_win_over_incident_keywords() {
        assert_eq!(
            classify("list the incidents on my monitors"),
            Intent::ListMonitors
        );
    }

    #[test]
    fn unrecognized_text_falls_through_to_overview() {
        assert_eq!(classify("good morning"), Intent::Overview);
        assert_eq!(classify(""), Intent::Overview);
    }
}
