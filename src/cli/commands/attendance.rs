//! Interactive attendance session

use super::Console;
use logger::{error, info, verbose};
use school_records::config::Config;
use school_records::core::attendance::AttendanceRegister;
use school_records::core::errors::ReportError;
use school_records::core::report::{ReportWriter, SchoolReport, StudentReport, SubjectReport};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

const MENU: &str = "
=== MAIN MENU ===
1. Mark Attendance
2. View Student Attendance
3. View Subject Attendance
4. Save Student Report
5. Save Subject Report
6. Save All Reports
7. Show Subjects List
8. Show Student's Subjects
9. Exit";

/// Allocate the roster and run the attendance menu on stdin/stdout
pub fn run(config: &Config) {
    let mut register = AttendanceRegister::standard();
    let writer = ReportWriter::new(&config.paths.reports_dir);
    info!("Attendance reports go to {}", writer.dir().display());
    verbose!("Reports directory: {}", writer.dir().display());

    if let Err(e) = session(&mut Console::stdio(), &mut register, &writer) {
        error!("Attendance session aborted: {e}");
    }
}

/// Run the menu loop until the user exits or input ends
pub fn session<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    register: &mut AttendanceRegister,
    writer: &ReportWriter,
) -> io::Result<()> {
    let learner_prompt = format!("Enter student ID (1-{}): ", register.learner_count());
    let subject_prompt = format!(
        "Enter subject ID (0-{}): ",
        register.catalog().len().saturating_sub(1)
    );

    console.say("Subject setup completed!")?;
    for usage in register.seat_usage() {
        console.say(format!("{}: {}/{}", usage.name, usage.taken, usage.cap))?;
    }
    console.say("=== SCHOOL ATTENDANCE SYSTEM ===")?;
    console.say(format!(
        "{} Students | {} Subjects",
        register.learner_count(),
        register.catalog().len()
    ))?;

    loop {
        console.say(MENU)?;
        let Some(choice) = console.prompt("Choose option: ")? else {
            break;
        };

        match choice.as_str() {
            "1" => {
                let Some(learner) = ask_id(console, &learner_prompt)? else {
                    break;
                };
                let Some(subject) = ask_id(console, &subject_prompt)? else {
                    break;
                };
                let (Some(learner), Some(subject)) = (learner, subject) else {
                    continue;
                };
                match register.mark_attendance(learner, subject) {
                    Ok(_) => console.say(format!(
                        "Marked attendance for Student {learner} in {}",
                        register.catalog().name(subject)
                    ))?,
                    Err(e) => console.say(format!("Error: {e}"))?,
                }
            }
            "2" => {
                let Some(learner) = ask_id(console, &learner_prompt)? else {
                    break;
                };
                let Some(learner) = learner else { continue };
                match register.learner_attendance(learner) {
                    Ok(view) => {
                        console.say(format!("\n=== Attendance for Student {} ===", view.learner))?;
                        for entry in &view.subjects {
                            console.say(format!("{}: {} sessions", entry.name, entry.sessions))?;
                        }
                        console.say(format!("Total: {} sessions", view.total))?;
                    }
                    Err(e) => console.say(format!("Error: {e}"))?,
                }
            }
            "3" => {
                let Some(subject) = ask_id(console, &subject_prompt)? else {
                    break;
                };
                let Some(subject) = subject else { continue };
                match register.subject_attendance(subject) {
                    Ok(view) => {
                        console.say(format!("\n=== Attendance for {} ===", view.name))?;
                        for entry in &view.learners {
                            console.say(format!(
                                "Student {}: {} sessions",
                                entry.learner, entry.sessions
                            ))?;
                        }
                        console.say(format!("Total students: {}", view.enrolled))?;
                        console.say(format!("Total sessions: {}", view.total))?;
                    }
                    Err(e) => console.say(format!("Error: {e}"))?,
                }
            }
            "4" => {
                let Some(learner) = ask_id(console, &learner_prompt)? else {
                    break;
                };
                let Some(learner) = learner else { continue };
                match register.learner_attendance(learner) {
                    Ok(view) => report_saved(console, writer.write(&StudentReport::new(&view)))?,
                    Err(e) => console.say(format!("Error: {e}"))?,
                }
            }
            "5" => {
                let Some(subject) = ask_id(console, &subject_prompt)? else {
                    break;
                };
                let Some(subject) = subject else { continue };
                match register.subject_attendance(subject) {
                    Ok(view) => report_saved(console, writer.write(&SubjectReport::new(&view)))?,
                    Err(e) => console.say(format!("Error: {e}"))?,
                }
            }
            "6" => {
                let view = register.school_attendance();
                report_saved(console, writer.write(&SchoolReport::new(&view)))?;
            }
            "7" => {
                console.say("\n=== SUBJECTS ===")?;
                for subject in register.catalog().iter() {
                    console.say(format!("{}. {}", subject.id, subject.name))?;
                }
            }
            "8" => {
                let Some(learner) = ask_id(console, &learner_prompt)? else {
                    break;
                };
                let Some(learner) = learner else { continue };
                match register.learner_subject_names(learner) {
                    Ok(names) => {
                        console.say(format!("\nStudent {learner} takes: {}", names.join(" ")))?;
                    }
                    Err(e) => console.say(format!("Error: {e}"))?,
                }
            }
            "9" => break,
            _ => console.say("Invalid choice! Try again.")?,
        }
    }

    console.say("Goodbye!")
}

/// Ask for a numeric id
///
/// `None` at end of input; `Some(None)` after telling the user the reply was
/// not a number.
fn ask_id<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    prompt: &str,
) -> io::Result<Option<Option<usize>>> {
    match console.prompt_parsed::<usize>(prompt)? {
        None => Ok(None),
        Some(Ok(id)) => Ok(Some(Some(id))),
        Some(Err(_)) => {
            console.say("Error: Please enter a number.")?;
            Ok(Some(None))
        }
    }
}

fn report_saved<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    saved: Result<PathBuf, ReportError>,
) -> io::Result<()> {
    match saved {
        Ok(path) => console.say(format!("Report saved to: {}", path.display())),
        Err(e) => {
            error!("{e}");
            console.say(format!("Error: {e}"))
        }
    }
}
