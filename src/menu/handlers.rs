//! Menu command handlers
//!
//! One handler per menu choice. Each handler prompts for whatever input it
//! needs, runs the store operation, and prints the outcome. A failed
//! operation is reported and logged; the session always continues.

use std::io;

use log::{error, info, warn};

use crate::menu::parser::{SessionCommand, SessionStatus};
use crate::session::Session;
use crate::store::{Grade, Store};
use crate::utils::dates;
use crate::utils::input::prompt;
use crate::utils::validation::{MAX_GOAL_LEN, is_valid_input};

/// Show the logged-in menu with the current user and active date
pub fn display_options(session: &Session) {
    println!(
        "Info - user: {} active date: {} Available options:",
        session.username(),
        session.active_date()
    );
    println!(
        "0. exit program\n\
         1. log out\n\
         2. list goals\n\
         3. add a new goal\n\
         4. delete a goal\n\
         5. input a grade (for active date)\n\
         6. input grades for all goals (for active date)\n\
         7. modify a grade (for active date)\n\
         8. change active date\n\
         9. display all grades within date range\n\
         10. display this help message again"
    );
}

/// Handle a single session command and report what the loop should do next
pub async fn handle_command(
    session: &mut Session,
    command: SessionCommand,
    store: &Store,
) -> SessionStatus {
    match command {
        SessionCommand::QuitProgram => SessionStatus::Exit,
        SessionCommand::Logout => {
            info!("User {} logged out", session.username());
            SessionStatus::Logout
        }
        SessionCommand::ListGoals => {
            handle_list_goals(session, store).await;
            SessionStatus::Continue
        }
        SessionCommand::AddGoal => {
            handle_add_goal(session, store).await;
            SessionStatus::Continue
        }
        SessionCommand::DeleteGoal => {
            handle_delete_goal(session, store).await;
            SessionStatus::Continue
        }
        SessionCommand::InputGrade => {
            handle_input_grade(session, store).await;
            SessionStatus::Continue
        }
        SessionCommand::InputAllGrades => {
            handle_input_all_grades(session, store).await;
            SessionStatus::Continue
        }
        SessionCommand::ModifyGrade => {
            handle_modify_grade(session, store).await;
            SessionStatus::Continue
        }
        SessionCommand::SetActiveDate => {
            handle_set_active_date(session);
            SessionStatus::Continue
        }
        SessionCommand::ListGradeRange => {
            handle_list_grade_range(session, store).await;
            SessionStatus::Continue
        }
        SessionCommand::Help => {
            display_options(session);
            SessionStatus::Continue
        }
        SessionCommand::Unknown(raw) => {
            println!("unrecognized input: {}. Enter 10 for the help message", raw);
            SessionStatus::Continue
        }
    }
}

// Command handler for listing goals
async fn handle_list_goals(session: &Session, store: &Store) {
    match store.list_goals(session.username()).await {
        Ok(goals) => {
            println!("Listing goals for user: {}", session.username());
            println!("------------------------------");
            for goal in &goals {
                println!("{}", goal);
            }
            println!("------------------------------");
        }
        Err(e) => {
            error!("Failed to list goals for {}: {}", session.username(), e);
            println!("could not list goals: {}", e);
        }
    }
}

// Command handler for adding a goal
async fn handle_add_goal(session: &Session, store: &Store) {
    let goal = match prompt("Enter the name of the new goal: ") {
        Ok(goal) => goal,
        Err(e) => {
            warn!("Aborting add goal: {}", e);
            return;
        }
    };

    if !is_valid_input(&goal, MAX_GOAL_LEN) {
        println!("goal names must be non-empty, printable, and at most {} characters", MAX_GOAL_LEN);
        return;
    }

    match store.create_goal(session.username(), &goal).await {
        Ok(()) => println!("goal: {} added successfully", goal),
        Err(e) => {
            error!("Failed to add goal for {}: {}", session.username(), e);
            println!("could not add goal: {}", e);
        }
    }
}

// Command handler for deleting a goal
async fn handle_delete_goal(session: &Session, store: &Store) {
    let goal = match prompt("Enter name of the goal to be deleted: ") {
        Ok(goal) => goal,
        Err(e) => {
            warn!("Aborting delete goal: {}", e);
            return;
        }
    };

    match store.delete_goal(session.username(), &goal).await {
        Ok(()) => println!("goal deleted successfully"),
        Err(e) => {
            error!("Failed to delete goal for {}: {}", session.username(), e);
            println!("could not delete goal: {}", e);
        }
    }
}

// Command handler for recording one grade on the active date
async fn handle_input_grade(session: &Session, store: &Store) {
    let goal = match prompt("Choose goal: ") {
        Ok(goal) => goal,
        Err(e) => {
            warn!("Aborting grade input: {}", e);
            return;
        }
    };

    let grade = match read_grade() {
        Ok(grade) => grade,
        Err(e) => {
            warn!("Aborting grade input: {}", e);
            return;
        }
    };

    match store
        .create_grade(session.username(), &goal, session.active_date(), grade)
        .await
    {
        Ok(()) => println!("grade input successful"),
        Err(e) => {
            error!("Failed to record grade for {}: {}", session.username(), e);
            println!("could not record grade: {}", e);
        }
    }
}

// Command handler for recording a grade against every goal on the active date
async fn handle_input_all_grades(session: &Session, store: &Store) {
    println!("input all grades for date: {}", session.active_date());

    let goals = match store.list_goals(session.username()).await {
        Ok(goals) => goals,
        Err(e) => {
            error!("Failed to list goals for {}: {}", session.username(), e);
            println!("could not load goals: {}", e);
            return;
        }
    };

    if goals.is_empty() {
        println!("no goals to grade yet; add one first");
        return;
    }

    // Collect every answer before writing, so the batch lands atomically.
    let mut entries = Vec::with_capacity(goals.len());
    for goal in goals {
        print!("Enter grade for goal - {} - ", goal);
        match read_grade() {
            Ok(grade) => entries.push((goal, grade)),
            Err(e) => {
                warn!("Aborting grade entry for the day: {}", e);
                println!("input ended early; no grades were recorded");
                return;
            }
        }
    }

    match store
        .record_day(session.username(), session.active_date(), &entries)
        .await
    {
        Ok(()) => println!("grades entered successfully"),
        Err(e) => {
            error!("Failed to record grades for {}: {}", session.username(), e);
            println!("could not record grades, nothing was saved: {}", e);
        }
    }
}

// Command handler for modifying a grade on the active date
async fn handle_modify_grade(session: &Session, store: &Store) {
    let goal = match prompt("Choose goal: ") {
        Ok(goal) => goal,
        Err(e) => {
            warn!("Aborting grade modification: {}", e);
            return;
        }
    };

    let grade = match read_grade() {
        Ok(grade) => grade,
        Err(e) => {
            warn!("Aborting grade modification: {}", e);
            return;
        }
    };

    match store
        .modify_grade(session.username(), &goal, session.active_date(), grade)
        .await
    {
        Ok(()) => println!("grade modification successful"),
        Err(e) => {
            error!("Failed to modify grade for {}: {}", session.username(), e);
            println!("could not modify grade: {}", e);
        }
    }
}

// Command handler for changing the active date
fn handle_set_active_date(session: &mut Session) {
    let raw = match prompt("Enter new date in the format YYYY-MM-DD: ") {
        Ok(raw) => raw,
        Err(e) => {
            warn!("Aborting active date change: {}", e);
            return;
        }
    };

    match dates::coerce_date(&raw) {
        Ok(date) => {
            session.set_active_date(date);
            println!("active date is now {}", date);
        }
        Err(e) => {
            warn!("Rejected date input {:?}: {}", raw, e);
            println!("{:?} is not a calendar date; active date unchanged", raw);
        }
    }
}

// Command handler for listing grades in a date range
async fn handle_list_grade_range(session: &Session, store: &Store) {
    let start = match prompt("Enter the beginning of the date range (YYYY-MM-DD): ") {
        Ok(raw) => match dates::coerce_date(&raw) {
            Ok(date) => date,
            Err(e) => {
                println!("not a calendar date: {}", e);
                return;
            }
        },
        Err(e) => {
            warn!("Aborting grade listing: {}", e);
            return;
        }
    };

    let end = match prompt("Enter the end of the date range (YYYY-MM-DD): ") {
        Ok(raw) => match dates::coerce_date(&raw) {
            Ok(date) => date,
            Err(e) => {
                println!("not a calendar date: {}", e);
                return;
            }
        },
        Err(e) => {
            warn!("Aborting grade listing: {}", e);
            return;
        }
    };

    match store
        .list_grade_range(session.username(), start, end)
        .await
    {
        Ok(rows) => {
            println!(
                "Listing all grades for user: {} in range: {} to {}",
                session.username(),
                start,
                end
            );
            println!("----------------------");
            for row in &rows {
                println!("{} {}: {}", row.cur_date, row.goal, row.grade);
            }
            println!("----------------------");
        }
        Err(e) => {
            error!("Failed to list grades for {}: {}", session.username(), e);
            println!("could not list grades: {}", e);
        }
    }
}

// Prompt for a letter grade, re-asking until the input is valid
fn read_grade() -> io::Result<Grade> {
    let mut raw = prompt("Enter grade [A,B,C,D,F], case-sensitive: ")?;
    loop {
        match raw.parse::<Grade>() {
            Ok(grade) => return Ok(grade),
            Err(_) => {
                raw = prompt("invalid grade. enter again [A,B,C,D,F], case-sensitive: ")?;
            }
        }
    }
}
