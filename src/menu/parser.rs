// Command enums for the two menus: the home screen and the logged-in session
#[derive(Debug, PartialEq)]
pub enum HomeCommand {
    Quit,
    Login,
    Register,
    Unknown(String),
}

#[derive(Debug, PartialEq)]
pub enum SessionCommand {
    QuitProgram,
    Logout,
    ListGoals,
    AddGoal,
    DeleteGoal,
    InputGrade,
    InputAllGrades,
    ModifyGrade,
    SetActiveDate,
    ListGradeRange,
    Help,
    Unknown(String),
}

/// What the session loop should do after a command is handled
#[derive(Debug, PartialEq)]
pub enum SessionStatus {
    Continue,
    Logout,
    Exit,
}

// Parse raw home-menu input into a HomeCommand
pub fn parse_home_command(raw: &str) -> HomeCommand {
    match raw.trim() {
        "0" => HomeCommand::Quit,
        "1" => HomeCommand::Login,
        "2" => HomeCommand::Register,
        other => HomeCommand::Unknown(other.to_string()),
    }
}

// Parse raw session-menu input into a SessionCommand
pub fn parse_session_command(raw: &str) -> SessionCommand {
    match raw.trim() {
        "0" => SessionCommand::QuitProgram,
        "1" => SessionCommand::Logout,
        "2" => SessionCommand::ListGoals,
        "3" => SessionCommand::AddGoal,
        "4" => SessionCommand::DeleteGoal,
        "5" => SessionCommand::InputGrade,
        "6" => SessionCommand::InputAllGrades,
        "7" => SessionCommand::ModifyGrade,
        "8" => SessionCommand::SetActiveDate,
        "9" => SessionCommand::ListGradeRange,
        "10" => SessionCommand::Help,
        other => SessionCommand::Unknown(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_home_commands() {
        assert_eq!(parse_home_command("0"), HomeCommand::Quit);
        assert_eq!(parse_home_command("1"), HomeCommand::Login);
        assert_eq!(parse_home_command("2"), HomeCommand::Register);
    }

    #[test]
    fn test_parse_session_commands() {
        assert_eq!(parse_session_command("0"), SessionCommand::QuitProgram);
        assert_eq!(parse_session_command("1"), SessionCommand::Logout);
        assert_eq!(parse_session_command("2"), SessionCommand::ListGoals);
        assert_eq!(parse_session_command("3"), SessionCommand::AddGoal);
        assert_eq!(parse_session_command("4"), SessionCommand::DeleteGoal);
        assert_eq!(parse_session_command("5"), SessionCommand::InputGrade);
        assert_eq!(parse_session_command("6"), SessionCommand::InputAllGrades);
        assert_eq!(parse_session_command("7"), SessionCommand::ModifyGrade);
        assert_eq!(parse_session_command("8"), SessionCommand::SetActiveDate);
        assert_eq!(parse_session_command("9"), SessionCommand::ListGradeRange);
        assert_eq!(parse_session_command("10"), SessionCommand::Help);
    }

    #[test]
    fn test_parse_with_whitespace() {
        assert_eq!(parse_home_command("  1  "), HomeCommand::Login);
        assert_eq!(parse_session_command(" 10 "), SessionCommand::Help);
    }

    #[test]
    fn test_unknown_commands() {
        assert_eq!(
            parse_home_command("3"),
            HomeCommand::Unknown("3".to_string())
        );
        assert_eq!(
            parse_home_command("login"),
            HomeCommand::Unknown("login".to_string())
        );
        assert_eq!(
            parse_session_command("11"),
            SessionCommand::Unknown("11".to_string())
        );
        assert_eq!(
            parse_session_command(""),
            SessionCommand::Unknown("".to_string())
        );
    }
}
