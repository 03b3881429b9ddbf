use regex::Regex;

use crate::shared::errors::AppError;

pub struct Validator;

impl Validator {
    pub fn validate_series_name(name: &str) -> Result<(), AppError> {
        if name.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Series name cannot be empty".to_string(),
            ));
        }
        if name.len() > 255 {
            return Err(AppError::ValidationError(
                "Series name too long (max 255 characters)".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_episode_count(episodes: i32) -> Result<(), AppError> {
        if episodes < 0 {
            return Err(AppError::ValidationError(
                "Episode count cannot be negative".to_string(),
            ));
        }
        Ok(())
    }

    /// Episodes seen can never exceed the series' episode count.
    pub fn validate_progress(seen: i32, episodes: i32) -> Result<(), AppError> {
        if seen < 0 {
            return Err(AppError::ValidationError(
                "Episodes seen cannot be negative".to_string(),
            ));
        }
        if seen > episodes {
            return Err(AppError::ValidationError(format!(
                "Episodes seen ({}) cannot exceed the episode count ({})",
                seen, episodes
            )));
        }
        Ok(())
    }

    pub fn validate_stars(stars: i32) -> Result<(), AppError> {
        if !(0..=5).contains(&stars) {
            return Err(AppError::ValidationError(
                "Rating must be between 0 and 5 stars".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_email(email: &str) -> Result<(), AppError> {
        let re = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
        if !re.is_match(email) {
            return Err(AppError::ValidationError(
                "Invalid email address".to_string(),
            ));
        }
        Ok(())
    }
}
