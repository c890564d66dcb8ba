use anyhow::Result;

use workweek::schedule::validate_schedule;

use super::Session;

pub async fn show(session: &Session) -> Result<()> {
    let schedule = session.load().await?;
    print!("{}", schedule.summary().display());
    Ok(())
}

/// Print the validation outcome; returns whether the schedule is valid
pub async fn validate(session: &Session) -> Result<bool> {
    let schedule = session.load().await?;
    let result = validate_schedule(&schedule);

    match &result.error {
        None => println!("Schedule is valid"),
        Some(reason) => println!("Schedule is invalid: {reason}"),
    }
    Ok(result.valid)
}
