//! Line-oriented interactive console over the same services the HTTP surface
//! uses. Menu selection is single-shot: anything that is not a listed option
//! number ends the session. Field prompts retry inline until the value passes
//! its format check.

use crate::errors::AppError;
use crate::models::{Job, Person};
use crate::services::{JobService, PersonService};

/// Bridges blocking stdin into a `Send` line iterator. The reader thread ends
/// when stdin closes or the receiver is dropped.
pub fn stdin_lines() -> impl Iterator<Item = String> + Send {
    use std::io::BufRead;

    let (tx, rx) = std::sync::mpsc::channel::<String>();
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx.into_iter()
}

const EXIT_MESSAGE: &str = "Input value is not an option menu, exiting console.";
const INVALID_READ: &str = "Error! Please enter a valid input:\n\
    For id and job id: only whole numbers allowed (ex: 1, 2, 3 etc.);\n\
    For name and email: only letters allowed;\n\
    For salary index: only real numbers allowed, from 1 to 3;\n\
    For base salary: only real numbers allowed, starting from 500;";

pub async fn run_person_console(
    persons: &PersonService,
    jobs: &JobService,
    input: &mut (impl Iterator<Item = String> + Send),
) {
    println!(
        "Welcome to the user management system interactive console!\n\
         This interactive console offers the possibility of manipulating the \"person\" database"
    );

    loop {
        print_person_menu();

        let Some(line) = input.next() else { break };
        let Ok(option) = line.trim().parse::<i32>() else {
            println!("{EXIT_MESSAGE}");
            break;
        };

        let outcome = match option {
            1 => list_persons(persons).await,
            2 => show_person(persons, input).await,
            3 => add_person(persons, jobs, input).await,
            4 => remove_person(persons, input).await,
            5 => change_salary_index(persons, input).await,
            6 => show_person_job(persons, input).await,
            7 => show_person_salary(persons, input).await,
            8 => show_person_work_experience(persons, input).await,
            _ => {
                println!("{EXIT_MESSAGE}");
                break;
            }
        };

        if let Err(e) = outcome {
            println!("{e}");
        }
    }
}

pub async fn run_job_console(
    jobs: &JobService,
    input: &mut (impl Iterator<Item = String> + Send),
) {
    println!(
        "Welcome to the user management system interactive console!\n\
         This interactive console offers the possibility of manipulating the \"job\" database"
    );

    loop {
        print_job_menu();

        let Some(line) = input.next() else { break };
        let Ok(option) = line.trim().parse::<i32>() else {
            println!("{EXIT_MESSAGE}");
            break;
        };

        let outcome = match option {
            1 => list_jobs(jobs).await,
            2 => show_job(jobs, input).await,
            3 => add_job(jobs, input).await,
            4 => remove_job(jobs, input).await,
            5 => change_base_salary(jobs, input).await,
            _ => {
                println!("{EXIT_MESSAGE}");
                break;
            }
        };

        if let Err(e) = outcome {
            println!("{e}");
        }
    }
}

// person menu actions

async fn list_persons(persons: &PersonService) -> Result<(), AppError> {
    for person in persons.all_persons().await? {
        println!("{}", person.console_line());
    }
    Ok(())
}

async fn show_person(
    persons: &PersonService,
    input: &mut (impl Iterator<Item = String> + Send),
) -> Result<(), AppError> {
    println!("Please specify the person's id, to have it retrieved.");
    let id = read_int(input)?;
    println!("{}", persons.person_by_id(id).await?);
    Ok(())
}

async fn add_person(
    persons: &PersonService,
    jobs: &JobService,
    input: &mut (impl Iterator<Item = String> + Send),
) -> Result<(), AppError> {
    list_persons(persons).await?;
    println!("PLEASE SPECIFY THE PERSON'S ID, MANDATORY DIFFERENT FROM THE ABOVE LISTED!");
    let id = read_int(input)?;

    println!("Please specify the person's name.");
    let name = read_letters(input)?;

    println!("Please specify the person's email.");
    let email = read_email(input)?;

    list_jobs(jobs).await?;
    println!("PLEASE SPECIFY THE PERSON'S JOB ID, MANDATORY ONE OF THE ABOVE LISTED!");
    let job_id = read_existing_job_id(jobs, input).await?;

    println!("Please specify the person's salary index.");
    let salary_index = read_salary_index(input)?;

    let person = Person {
        id,
        name,
        email,
        job_id,
        salary_index,
    };
    persons.insert_person(&person).await?;
    println!("{person}");
    Ok(())
}

async fn remove_person(
    persons: &PersonService,
    input: &mut (impl Iterator<Item = String> + Send),
) -> Result<(), AppError> {
    println!("Please specify the person's id, to be deleted.");
    persons.delete_person(read_int(input)?).await
}

async fn change_salary_index(
    persons: &PersonService,
    input: &mut (impl Iterator<Item = String> + Send),
) -> Result<(), AppError> {
    println!("Please specify the person's id, to be updated by salary index.");
    let id = read_int(input)?;
    println!("Please specify the person's new salary index.");
    let salary_index = read_salary_index(input)?;
    let updated = persons.update_salary_index(id, salary_index).await?;
    println!("{updated}");
    Ok(())
}

async fn show_person_job(
    persons: &PersonService,
    input: &mut (impl Iterator<Item = String> + Send),
) -> Result<(), AppError> {
    println!("Please specify the person's id, to retrieve their job.");
    let job = persons.person_job(read_int(input)?).await?;
    println!("{job}");
    Ok(())
}

async fn show_person_salary(
    persons: &PersonService,
    input: &mut (impl Iterator<Item = String> + Send),
) -> Result<(), AppError> {
    println!("Please specify the person's id, to retrieve their salary.");
    let salary = persons.person_salary(read_int(input)?).await?;
    println!("Salary: {salary}");
    Ok(())
}

async fn show_person_work_experience(
    persons: &PersonService,
    input: &mut (impl Iterator<Item = String> + Send),
) -> Result<(), AppError> {
    println!("Please specify the person's id, to retrieve their work experience.");
    let experience = persons.person_work_experience(read_int(input)?).await?;
    println!("{experience}");
    Ok(())
}

// job menu actions

async fn list_jobs(jobs: &JobService) -> Result<(), AppError> {
    for job in jobs.all_jobs().await? {
        println!("{}", job.console_line());
    }
    Ok(())
}

async fn show_job(
    jobs: &JobService,
    input: &mut (impl Iterator<Item = String> + Send),
) -> Result<(), AppError> {
    println!("Please specify the job id, to have it retrieved.");
    let id = read_int(input)?;
    println!("{}", jobs.job_by_id(id).await?);
    Ok(())
}

async fn add_job(
    jobs: &JobService,
    input: &mut (impl Iterator<Item = String> + Send),
) -> Result<(), AppError> {
    list_jobs(jobs).await?;
    println!("PLEASE SPECIFY THE JOB ID, MANDATORY DIFFERENT FROM THE ABOVE LISTED!");
    let id = read_int(input)?;

    println!("Please specify the job name.");
    let name = read_letters(input)?;

    println!("Please specify the job domain.");
    let domain = read_letters(input)?;

    println!("Please specify the job base salary.");
    let base_salary = read_base_salary(input)?;

    let job = Job {
        id,
        name,
        domain,
        base_salary,
    };
    jobs.insert_job(&job).await?;
    println!("{job}");
    Ok(())
}

async fn remove_job(
    jobs: &JobService,
    input: &mut (impl Iterator<Item = String> + Send),
) -> Result<(), AppError> {
    println!("Please specify the job id, to be deleted.");
    jobs.delete_job(read_int(input)?).await
}

async fn change_base_salary(
    jobs: &JobService,
    input: &mut (impl Iterator<Item = String> + Send),
) -> Result<(), AppError> {
    println!("Please specify the job id, to be updated by base salary.");
    let id = read_int(input)?;
    println!("Please specify the job's new base salary.");
    let base_salary = read_base_salary(input)?;
    let updated = jobs.update_base_salary(id, base_salary).await?;
    println!("{updated}");
    Ok(())
}

// field readers

/// Single-shot whole-number read; a bad value aborts the menu action (the
/// error text is printed and control returns to the menu).
fn read_int(input: &mut (impl Iterator<Item = String> + Send)) -> Result<i32, AppError> {
    let line = input
        .next()
        .ok_or_else(|| AppError::Validation(INVALID_READ.to_string()))?;
    line.trim()
        .parse::<i32>()
        .map_err(|_| AppError::Validation(INVALID_READ.to_string()))
}

/// Retries until the line is letters only.
fn read_letters(input: &mut (impl Iterator<Item = String> + Send)) -> Result<String, AppError> {
    loop {
        let line = input
            .next()
            .ok_or_else(|| AppError::Validation(INVALID_READ.to_string()))?;
        let value = line.trim().to_string();
        if !value.is_empty() && value.chars().all(|c| c.is_ascii_alphabetic()) {
            return Ok(value);
        }
        println!("Input error! Please insert letters only for name, email or domain: ");
    }
}

/// Retries until the line looks like an email (contains both `@` and `.`),
/// matching what the insert validation will accept.
fn read_email(input: &mut (impl Iterator<Item = String> + Send)) -> Result<String, AppError> {
    loop {
        let line = input
            .next()
            .ok_or_else(|| AppError::Validation(INVALID_READ.to_string()))?;
        let value = line.trim().to_string();
        if value.contains('@') && value.contains('.') {
            return Ok(value);
        }
        println!("Input error! Please insert a valid email (ex: example123@email.com): ");
    }
}

/// Retries until the line parses as a real number in [1, 3].
fn read_salary_index(input: &mut (impl Iterator<Item = String> + Send)) -> Result<f64, AppError> {
    loop {
        let line = input
            .next()
            .ok_or_else(|| AppError::Validation(INVALID_READ.to_string()))?;
        if let Ok(value) = line.trim().parse::<f64>() {
            if (1.0..=3.0).contains(&value) {
                return Ok(value);
            }
        }
        println!("Input error! Please insert real numbers (between 1 and 3) for salary index: ");
    }
}

/// Retries until the line parses as a real number at or above 500.
fn read_base_salary(input: &mut (impl Iterator<Item = String> + Send)) -> Result<f64, AppError> {
    loop {
        let line = input
            .next()
            .ok_or_else(|| AppError::Validation(INVALID_READ.to_string()))?;
        if let Ok(value) = line.trim().parse::<f64>() {
            if value >= 500.0 {
                return Ok(value);
            }
        }
        println!("Input error! Please insert real numbers (greater than 500) for base salary: ");
    }
}

/// Retries until the line is a whole number naming a job that exists.
async fn read_existing_job_id(
    jobs: &JobService,
    input: &mut (impl Iterator<Item = String> + Send),
) -> Result<i32, AppError> {
    loop {
        let line = input
            .next()
            .ok_or_else(|| AppError::Validation(INVALID_READ.to_string()))?;
        match line.trim().parse::<i32>() {
            Ok(id) => {
                if jobs.job_by_id(id).await.is_ok() {
                    return Ok(id);
                }
                println!("Input error! Please enter a valid, existent job id: ");
            }
            Err(_) => println!("Input error! Please insert whole numbers for job id: "),
        }
    }
}

fn print_person_menu() {
    println!(
        "\nPlease select an option, from the following available:\n\
         1. Display all persons from the database.\n\
         2. Display a certain person, by id.\n\
         3. Add a new person.\n\
         4. Delete an existing person.\n\
         5. Update a person's salary index.\n\
         6. Display a certain person's job.\n\
         7. Display a certain person's salary.\n\
         8. Display a certain person's work experience.\n\
         Type any other key to exit!\n"
    );
}

fn print_job_menu() {
    println!(
        "\nPlease select an option, from the following available:\n\
         1. Display all jobs from the database.\n\
         2. Display a certain job, by id.\n\
         3. Add a new job.\n\
         4. Delete an existing job.\n\
         5. Update a job's base salary.\n\
         Type any other key to exit!\n"
    );
}
