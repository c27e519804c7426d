use thiserror::Error;

pub const MINUTES_PER_DAY: u32 = 24 * 60;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClockError {
    #[error("invalid time of day (expected HH:MM): {0}")]
    InvalidTime(String),
    #[error("invalid duration (expected positive hours): {0}")]
    InvalidDuration(String),
}

/// `HH:MM` (24 h) → minutes depuis minuit.
pub fn parse_hhmm(raw: &str) -> Result<u32, ClockError> {
    let trimmed = raw.trim();
    let Some((h, m)) = trimmed.split_once(':') else {
        return Err(ClockError::InvalidTime(raw.to_string()));
    };
    let h: u32 = h
        .parse()
        .map_err(|_| ClockError::InvalidTime(raw.to_string()))?;
    let m: u32 = m
        .parse()
        .map_err(|_| ClockError::InvalidTime(raw.to_string()))?;
    if h > 23 || m > 59 {
        return Err(ClockError::InvalidTime(raw.to_string()));
    }
    Ok(h * 60 + m)
}

/// Minutes depuis minuit → `HH:MM`, enroulé sur une seule journée.
pub fn minutes_to_hhmm(minutes: u32) -> String {
    let m = minutes % MINUTES_PER_DAY;
    format!("{:02}:{:02}", m / 60, m % 60)
}

/// Durée en heures (fraction permise, ex. "1.5") → minutes entières.
/// L'arithmétique des tranches se fait ensuite en minutes pour éviter
/// toute dérive flottante.
pub fn parse_duration_hours(raw: &str) -> Result<u32, ClockError> {
    let hours: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ClockError::InvalidDuration(raw.to_string()))?;
    if !hours.is_finite() || hours <= 0.0 {
        return Err(ClockError::InvalidDuration(raw.to_string()));
    }
    let minutes = (hours * 60.0).round();
    if minutes < 1.0 || minutes > f64::from(MINUTES_PER_DAY) {
        return Err(ClockError::InvalidDuration(raw.to_string()));
    }
    Ok(minutes as u32)
}

/// floor((fin − début) / durée). Fenêtre vide ou inversée → 0 ; un reste qui
/// ne remplit pas une tranche entière est abandonné.
pub fn slot_count(start_min: u32, end_min: u32, duration_min: u32) -> usize {
    if duration_min == 0 || end_min <= start_min {
        return 0;
    }
    ((end_min - start_min) / duration_min) as usize
}

/// Fenêtre horaire de la tranche `index` : labels `HH:MM` de début et de fin.
pub fn slot_window(start_min: u32, index: usize, duration_min: u32) -> (String, String) {
    let from = start_min + index as u32 * duration_min;
    let to = from + duration_min;
    (minutes_to_hhmm(from), minutes_to_hhmm(to))
}
