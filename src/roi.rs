//! Return-on-investment arithmetic behind the savings calculator.

/// Share of grading time Markwise is assumed to remove.
pub const TIME_REDUCTION: f64 = 0.8;
pub const WEEKS_PER_YEAR: f64 = 52.0;
/// Annual cost of one teaching position, used for the headcount comparison.
pub const ANNUAL_SALARY: f64 = 60_000.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl SliderRange {
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }
        value.clamp(self.min, self.max)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoiInputs {
    pub teacher_count: u32,
    /// Essays graded per week across the whole department.
    pub essays_per_week: u32,
    pub minutes_per_essay: f64,
    pub hourly_rate: f64,
}

impl Default for RoiInputs {
    fn default() -> Self {
        Self {
            teacher_count: 10,
            essays_per_week: 300,
            minutes_per_essay: 15.0,
            hourly_rate: 35.0,
        }
    }
}

impl RoiInputs {
    pub const TEACHERS: SliderRange = SliderRange { min: 1.0, max: 200.0, step: 1.0 };
    pub const ESSAYS: SliderRange = SliderRange { min: 10.0, max: 5_000.0, step: 10.0 };
    pub const MINUTES: SliderRange = SliderRange { min: 1.0, max: 60.0, step: 1.0 };
    pub const RATE: SliderRange = SliderRange { min: 15.0, max: 150.0, step: 1.0 };

    /// Same inputs forced into the slider ranges.
    pub fn clamped(self) -> Self {
        Self {
            teacher_count: Self::TEACHERS.clamp(f64::from(self.teacher_count)) as u32,
            essays_per_week: Self::ESSAYS.clamp(f64::from(self.essays_per_week)) as u32,
            minutes_per_essay: Self::MINUTES.clamp(self.minutes_per_essay),
            hourly_rate: Self::RATE.clamp(self.hourly_rate),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoiOutputs {
    pub weekly_hours: f64,
    pub annual_hours: f64,
    pub time_saved_hours: f64,
    pub cost_savings: f64,
    /// Teaching positions the savings would pay for, never below one.
    pub equivalent_headcount: u32,
    pub hours_saved_per_teacher: f64,
}

pub fn calculate(inputs: &RoiInputs) -> RoiOutputs {
    let weekly_hours = f64::from(inputs.essays_per_week) * inputs.minutes_per_essay / 60.0;
    let annual_hours = weekly_hours * WEEKS_PER_YEAR;
    let time_saved_hours = annual_hours * TIME_REDUCTION;
    let cost_savings = time_saved_hours * inputs.hourly_rate;
    let equivalent_headcount = ((cost_savings / ANNUAL_SALARY).round() as u32).max(1);
    let hours_saved_per_teacher = time_saved_hours / f64::from(inputs.teacher_count.max(1));

    RoiOutputs {
        weekly_hours,
        annual_hours,
        time_saved_hours,
        cost_savings,
        equivalent_headcount,
        hours_saved_per_teacher,
    }
}

/// `12345.6` -> `"$12,346"`.
pub fn format_currency(amount: f64) -> String {
    format!("${}", group_thousands(amount.round().max(0.0) as u64))
}

pub fn format_hours(hours: f64) -> String {
    format!("{} hrs", group_thousands(hours.round().max(0.0) as u64))
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
