//! Validate command handler
//!
//! Builds one of the submission forms from `--field key=value` pairs and runs
//! its required-field check.

use crate::args::FormArg;
use logger::{debug, info};
use unimate::forms::{
    ComplaintForm, EmergencyForm, Form, GradeForm, LostFoundForm, ReminderForm, UploadForm,
};

/// Run the validate command; exits with status 1 when the form is rejected
pub fn run(form: FormArg, fields: &[(String, String)]) {
    match check(form, fields) {
        Ok(()) => println!("✓ Form is complete"),
        Err(e) => {
            eprintln!("✗ {e}");
            std::process::exit(1);
        }
    }
}

/// Build the form and validate it
///
/// # Errors
/// Returns a message for unknown keys, unparseable values or a failed check.
pub fn check(form: FormArg, fields: &[(String, String)]) -> Result<(), String> {
    let built: Box<dyn Form> = match form {
        FormArg::Grade => {
            let mut f = GradeForm::default();
            for (key, value) in fields {
                match key.as_str() {
                    "subject" => f.subject.clone_from(value),
                    "grade" => f.grade.clone_from(value),
                    "credits" => f.credits.clone_from(value),
                    "semester" => f.semester.clone_from(value),
                    other => return Err(unknown(other, form)),
                }
            }
            // Credits must also parse; to_record runs both checks
            f.to_record().map_err(|e| e.to_string())?;
            Box::new(f)
        }
        FormArg::Reminder => {
            let mut f = ReminderForm::default();
            for (key, value) in fields {
                match key.as_str() {
                    "title" => f.title.clone_from(value),
                    "description" => f.description.clone_from(value),
                    "due-date" | "due_date" => f.due_date.clone_from(value),
                    "priority" => f.priority = value.trim().parse()?,
                    "category" => f.category = value.trim().parse()?,
                    other => return Err(unknown(other, form)),
                }
            }
            Box::new(f)
        }
        FormArg::Upload => {
            let mut f = UploadForm::default();
            for (key, value) in fields {
                match key.as_str() {
                    "title" => f.title.clone_from(value),
                    "description" => f.description.clone_from(value),
                    "tags" => f.tags.clone_from(value),
                    "community" => f.community.clone_from(value),
                    other => return Err(unknown(other, form)),
                }
            }
            debug!("Upload tags: {:?}", f.tag_list());
            Box::new(f)
        }
        FormArg::LostFound => {
            let mut f = LostFoundForm::default();
            for (key, value) in fields {
                match key.as_str() {
                    "title" => f.title.clone_from(value),
                    "description" => f.description.clone_from(value),
                    "location" => f.location.clone_from(value),
                    "contact" => f.contact.clone_from(value),
                    "category" => f.category = value.trim().parse()?,
                    other => return Err(unknown(other, form)),
                }
            }
            Box::new(f)
        }
        FormArg::Complaint => {
            let mut f = ComplaintForm::default();
            for (key, value) in fields {
                match key.as_str() {
                    "kind" | "type" => f.kind = value.trim().parse()?,
                    "description" => f.description.clone_from(value),
                    "location" => f.location.clone_from(value),
                    "anonymous" => f.anonymous = parse_flag(value)?,
                    "contact" => f.contact.clone_from(value),
                    other => return Err(unknown(other, form)),
                }
            }
            Box::new(f)
        }
        FormArg::Emergency => {
            let mut f = EmergencyForm::default();
            for (key, value) in fields {
                match key.as_str() {
                    "kind" | "type" => f.kind = value.trim().parse()?,
                    "description" => f.description.clone_from(value),
                    "contact" => f.contact.clone_from(value),
                    other => return Err(unknown(other, form)),
                }
            }
            Box::new(f)
        }
    };

    built.validate().map_err(|e| e.to_string())?;
    info!("{form:?} form passed validation");
    Ok(())
}

fn unknown(key: &str, form: FormArg) -> String {
    format!("Unknown field '{key}' for the {form:?} form")
}

fn parse_flag(value: &str) -> Result<bool, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        other => Err(format!("Expected true or false, got '{other}'")),
    }
}
