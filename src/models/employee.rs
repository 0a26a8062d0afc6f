//! Employee record models.
//!
//! This module defines the [`EmployeeRecord`] union and its two concrete
//! variants, [`HourlyEmployee`] and [`SalariedEmployee`]. Each variant
//! supplies its own monthly pay formula; the shared value contract
//! (equality, hashing, description) lives here as well.
//!
//! Records are immutable after construction: every field is set exactly
//! once by a constructor and only exposed through accessors.

use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{RosterError, RosterResult};

/// Multiplier used to combine successive field hashes, order-sensitively.
const HASH_PRIME: u64 = 31;

/// Variant tag mixed into hourly record hashes.
const HOURLY_TAG: u64 = 1;

/// Variant tag mixed into salaried record hashes.
const SALARIED_TAG: u64 = 2;

/// An employee paid by the hour.
///
/// Monthly pay is `wage_rate * hours_worked`, where `hours_worked` is the
/// hours recorded for the month. No overtime rules apply at this level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyEmployee {
    /// The employee's full name.
    name: String,
    /// The date the employee was hired.
    hire_date: NaiveDate,
    /// The hourly wage rate.
    wage_rate: f64,
    /// The hours worked in the month.
    hours_worked: f64,
}

impl HourlyEmployee {
    /// Creates a new hourly employee record.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::InvalidField`] if `wage_rate` or
    /// `hours_worked` is negative.
    ///
    /// # Examples
    ///
    /// ```
    /// use pay_roster::models::HourlyEmployee;
    /// use chrono::NaiveDate;
    ///
    /// let hire_date = NaiveDate::from_ymd_opt(2009, 5, 21).unwrap();
    /// let john = HourlyEmployee::new("John Doe", hire_date, 50.5, 160.0).unwrap();
    /// assert_eq!(john.monthly_pay(), 8080.0);
    /// ```
    pub fn new(
        name: impl Into<String>,
        hire_date: NaiveDate,
        wage_rate: f64,
        hours_worked: f64,
    ) -> RosterResult<Self> {
        check_non_negative("wage_rate", wage_rate)?;
        check_non_negative("hours_worked", hours_worked)?;
        Ok(Self {
            name: name.into(),
            hire_date,
            wage_rate,
            hours_worked,
        })
    }

    /// Returns the employee's full name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the date the employee was hired.
    pub fn hire_date(&self) -> NaiveDate {
        self.hire_date
    }

    /// Returns the hourly wage rate.
    pub fn wage_rate(&self) -> f64 {
        self.wage_rate
    }

    /// Returns the hours worked in the month.
    pub fn hours_worked(&self) -> f64 {
        self.hours_worked
    }

    /// Calculates the monthly pay as wage rate times hours worked.
    pub fn monthly_pay(&self) -> f64 {
        self.wage_rate * self.hours_worked
    }

    /// Returns a hash combining every field that participates in equality.
    pub fn hash_code(&self) -> u64 {
        let mut code = combine(HOURLY_TAG, hash_of(&self.name));
        code = combine(code, hash_of(&self.hire_date));
        code = combine(code, float_hash(self.wage_rate));
        combine(code, float_hash(self.hours_worked))
    }
}

impl fmt::Display for HourlyEmployee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HourlyEmployee[name={}, hireDate={}, wageRate={}, hoursWorked={}]",
            self.name, self.hire_date, self.wage_rate, self.hours_worked
        )
    }
}

/// An employee paid a fixed annual salary.
///
/// Monthly pay is `annual_salary / 12.0`, using floating division.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalariedEmployee {
    /// The employee's full name.
    name: String,
    /// The date the employee was hired.
    hire_date: NaiveDate,
    /// The annual salary.
    annual_salary: f64,
}

impl SalariedEmployee {
    /// Creates a new salaried employee record.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::InvalidField`] if `annual_salary` is negative.
    ///
    /// # Examples
    ///
    /// ```
    /// use pay_roster::models::SalariedEmployee;
    /// use chrono::NaiveDate;
    ///
    /// let hire_date = NaiveDate::from_ymd_opt(2004, 1, 1).unwrap();
    /// let moe = SalariedEmployee::new("Moe Howard", hire_date, 75000.0).unwrap();
    /// assert_eq!(moe.monthly_pay(), 6250.0);
    /// ```
    pub fn new(
        name: impl Into<String>,
        hire_date: NaiveDate,
        annual_salary: f64,
    ) -> RosterResult<Self> {
        check_non_negative("annual_salary", annual_salary)?;
        Ok(Self {
            name: name.into(),
            hire_date,
            annual_salary,
        })
    }

    /// Returns the employee's full name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the date the employee was hired.
    pub fn hire_date(&self) -> NaiveDate {
        self.hire_date
    }

    /// Returns the annual salary.
    pub fn annual_salary(&self) -> f64 {
        self.annual_salary
    }

    /// Calculates the monthly pay as one twelfth of the annual salary.
    pub fn monthly_pay(&self) -> f64 {
        self.annual_salary / 12.0
    }

    /// Returns a hash combining every field that participates in equality.
    pub fn hash_code(&self) -> u64 {
        let mut code = combine(SALARIED_TAG, hash_of(&self.name));
        code = combine(code, hash_of(&self.hire_date));
        combine(code, float_hash(self.annual_salary))
    }
}

impl fmt::Display for SalariedEmployee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SalariedEmployee[name={}, hireDate={}, annualSalary={}]",
            self.name, self.hire_date, self.annual_salary
        )
    }
}

/// A record for one employee of any kind.
///
/// The set of variants is closed: every record is exactly one of the
/// concrete kinds, and a roster holds a mix of them behind this union.
/// Equality is derived, so records of different variants are never equal
/// even when their shared fields match, and float fields compare under
/// IEEE `==` (NaN is unequal to itself, `-0.0` equals `+0.0`).
///
/// The union deliberately does not implement `PartialOrd`: the pay
/// ordering used for sorting disagrees with value equality, so it is
/// exposed as a named comparator in [`crate::calculation`] instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EmployeeRecord {
    /// An hourly-paid employee.
    Hourly(HourlyEmployee),
    /// A salaried employee.
    Salaried(SalariedEmployee),
}

impl EmployeeRecord {
    /// Returns the employee's full name.
    pub fn name(&self) -> &str {
        match self {
            Self::Hourly(e) => e.name(),
            Self::Salaried(e) => e.name(),
        }
    }

    /// Returns the date the employee was hired.
    pub fn hire_date(&self) -> NaiveDate {
        match self {
            Self::Hourly(e) => e.hire_date(),
            Self::Salaried(e) => e.hire_date(),
        }
    }

    /// Calculates the monthly pay using the variant's own formula.
    ///
    /// # Examples
    ///
    /// ```
    /// use pay_roster::models::{EmployeeRecord, HourlyEmployee, SalariedEmployee};
    /// use chrono::NaiveDate;
    ///
    /// let date = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
    /// let hourly = EmployeeRecord::Hourly(HourlyEmployee::new("A", date, 50.5, 160.0).unwrap());
    /// let salaried = EmployeeRecord::Salaried(SalariedEmployee::new("B", date, 75000.0).unwrap());
    /// assert_eq!(hourly.monthly_pay(), 8080.0);
    /// assert_eq!(salaried.monthly_pay(), 6250.0);
    /// ```
    pub fn monthly_pay(&self) -> f64 {
        match self {
            Self::Hourly(e) => e.monthly_pay(),
            Self::Salaried(e) => e.monthly_pay(),
        }
    }

    /// Returns a hash consistent with equality: any two equal records
    /// produce the same value.
    ///
    /// Field hashes are combined order-sensitively with a fixed prime
    /// multiplier, floats contributing their IEEE-754 bit pattern with
    /// `-0.0` normalised to `+0.0` to stay consistent with `==`. A
    /// distinct variant tag is mixed in first, so identical field sets
    /// across variants do not collide structurally.
    pub fn hash_code(&self) -> u64 {
        match self {
            Self::Hourly(e) => e.hash_code(),
            Self::Salaried(e) => e.hash_code(),
        }
    }

    /// Renders the variant name and all its fields for display or
    /// debugging. Not part of equality or ordering.
    ///
    /// The format is
    /// `<VariantName>[name=<name>, hireDate=<ISO date>, <field>=<value>, ...]`
    /// with variant-specific fields in declaration order.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for EmployeeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hourly(e) => e.fmt(f),
            Self::Salaried(e) => e.fmt(f),
        }
    }
}

impl Hash for EmployeeRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

impl From<HourlyEmployee> for EmployeeRecord {
    fn from(employee: HourlyEmployee) -> Self {
        Self::Hourly(employee)
    }
}

impl From<SalariedEmployee> for EmployeeRecord {
    fn from(employee: SalariedEmployee) -> Self {
        Self::Salaried(employee)
    }
}

fn check_non_negative(field: &str, value: f64) -> RosterResult<()> {
    // NaN is not less than zero and passes through unchanged.
    if value < 0.0 {
        return Err(RosterError::InvalidField {
            field: field.to_string(),
            message: format!("must not be negative, got {value}"),
        });
    }
    Ok(())
}

fn combine(code: u64, field_hash: u64) -> u64 {
    code.wrapping_mul(HASH_PRIME).wrapping_add(field_hash)
}

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Hashes a float by its bit pattern, folding `-0.0` onto `+0.0` so the
/// hash stays consistent with IEEE `==` on the field.
fn float_hash(value: f64) -> u64 {
    if value == 0.0 { 0 } else { value.to_bits() }
}
