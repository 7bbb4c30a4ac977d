use schedbot::bot::commands::Command;
use teloxide::utils::command::BotCommands;

#[cfg(test)]
mod command_parsing_tests {
    use super::*;

    #[test]
    fn test_start_command_parsing() {
        let result = Command::parse("/start", "testbot");
        assert!(result.is_ok());
        assert!(matches!(result.unwrap(), Command::Start));
    }

    #[test]
    fn test_help_command_parsing() {
        let result = Command::parse("/help", "testbot");
        assert!(result.is_ok());
        assert!(matches!(result.unwrap(), Command::Help));
    }

    #[test]
    fn test_day_view_commands_parsing() {
        assert!(matches!(
            Command::parse("/today", "testbot").unwrap(),
            Command::Today
        ));
        assert!(matches!(
            Command::parse("/tomorrow", "testbot").unwrap(),
            Command::Tomorrow
        ));
    }

    #[test]
    fn test_week_commands_parsing() {
        assert!(matches!(
            Command::parse("/week", "testbot").unwrap(),
            Command::Week
        ));
        assert!(matches!(
            Command::parse("/next_week", "testbot").unwrap(),
            Command::NextWeek
        ));
    }

    #[test]
    fn test_date_command_with_argument() {
        match Command::parse("/date 25.09.2025", "testbot").unwrap() {
            Command::Date { date } => assert_eq!(date, "25.09.2025"),
            other => panic!("expected Date, got {}", describe(&other)),
        }
    }

    #[test]
    fn test_date_command_without_argument() {
        // a missing argument parses as an empty string; the handler answers
        // with a usage hint
        match Command::parse("/date", "testbot").unwrap() {
            Command::Date { date } => assert_eq!(date, ""),
            other => panic!("expected Date, got {}", describe(&other)),
        }
    }

    #[test]
    fn test_subject_command_takes_whole_tail() {
        match Command::parse("/subject Вища математика", "testbot").unwrap() {
            Command::Subject { name } => assert_eq!(name, "Вища математика"),
            other => panic!("expected Subject, got {}", describe(&other)),
        }
    }

    #[test]
    fn test_subject_command_without_argument_opens_menu() {
        match Command::parse("/subject", "testbot").unwrap() {
            Command::Subject { name } => assert_eq!(name, ""),
            other => panic!("expected Subject, got {}", describe(&other)),
        }
    }

    #[test]
    fn test_notification_commands_parsing() {
        assert!(matches!(
            Command::parse("/notify_on", "testbot").unwrap(),
            Command::NotifyOn
        ));
        assert!(matches!(
            Command::parse("/notify_off", "testbot").unwrap(),
            Command::NotifyOff
        ));
    }

    #[test]
    fn test_next_and_debug_parsing() {
        assert!(matches!(
            Command::parse("/next", "testbot").unwrap(),
            Command::Next
        ));
        assert!(matches!(
            Command::parse("/debug", "testbot").unwrap(),
            Command::Debug
        ));
    }

    #[test]
    fn test_unknown_command_is_rejected() {
        assert!(Command::parse("/frobnicate", "testbot").is_err());
    }

    #[test]
    fn test_command_with_bot_mention() {
        assert!(matches!(
            Command::parse("/today@testbot", "testbot").unwrap(),
            Command::Today
        ));
    }

    fn describe(cmd: &Command) -> &'static str {
        match cmd {
            Command::Start => "Start",
            Command::Help => "Help",
            Command::Today => "Today",
            Command::Tomorrow => "Tomorrow",
            Command::Week => "Week",
            Command::NextWeek => "NextWeek",
            Command::Date { .. } => "Date",
            Command::Subject { .. } => "Subject",
            Command::Next => "Next",
            Command::NotifyOn => "NotifyOn",
            Command::NotifyOff => "NotifyOff",
            Command::Debug => "Debug",
        }
    }
}
