//! Command definitions and dispatch

use chrono::DateTime;
use clap::{Parser, Subcommand};
use medi_auth::{
    Argon2Hasher, CredentialService, LoginOutcome, PasswordChange, SecretHasher, Sha256Hasher,
    generate_onboarding_secret,
};
use medi_payroll::{
    build_payment_request, close_clock_record_with, close_record, compute_overtime_pay_with,
    open_clock_record,
};
use serde_json::{Value, json};
use shared::AppError;
use shared::models::{NewAccount, PayCalculation, PaymentRequestCreate, Role};
use shared::util::HOUR_MILLIS;

use crate::config::AdminConfig;
use crate::seed::demo_directory;

#[derive(Parser)]
#[command(name = "medi-admin")]
#[command(about = "Credential and payroll policy tool")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Hash a secret (defaults to the onboarding secret)
    Hash {
        secret: Option<String>,
        /// Salted Argon2 instead of the deterministic SHA-256 digest
        #[arg(long)]
        argon2: bool,
    },
    /// Check a secret against the password policy
    Validate {
        secret: String,
        /// Display name of the account holder
        name: Vec<String>,
    },
    /// Overtime pay for a monthly salary
    Overtime {
        #[arg(allow_negative_numbers = true)]
        monthly_salary: f64,
        #[arg(allow_negative_numbers = true)]
        overtime_hours: f64,
    },
    /// Worked and overtime hours between two RFC 3339 timestamps
    Hours {
        #[arg(value_parser = parse_timestamp)]
        clock_in: i64,
        #[arg(value_parser = parse_timestamp)]
        clock_out: i64,
    },
    /// Onboard a demo nurse, close a long shift and file a payment request
    Demo,
}

impl Command {
    /// Name for logging; arguments may hold secrets
    pub fn name(&self) -> &'static str {
        match self {
            Self::Hash { .. } => "hash",
            Self::Validate { .. } => "validate",
            Self::Overtime { .. } => "overtime",
            Self::Hours { .. } => "hours",
            Self::Demo => "demo",
        }
    }
}

/// RFC 3339 timestamp to Unix millis
fn parse_timestamp(value: &str) -> Result<i64, chrono::ParseError> {
    DateTime::parse_from_rfc3339(value).map(|t| t.timestamp_millis())
}

/// Run a command and render its output
///
/// Domain failures surface as [`AppError`] so the caller can report the
/// error code and category.
pub fn execute(command: Command, config: &AdminConfig, now: i64) -> anyhow::Result<String> {
    let output = match command {
        Command::Hash { secret, argon2 } => {
            let secret = secret.unwrap_or_else(generate_onboarding_secret);
            let hashed = if argon2 {
                Argon2Hasher.hash(&secret)
            } else {
                Sha256Hasher.hash(&secret)
            };
            hashed.map_err(AppError::from)?
        }
        Command::Validate { secret, name } => {
            let validation = config.policy.password.validate(&secret, &name.join(" "));
            serde_json::to_string_pretty(&json!({
                "valid": validation.valid,
                "violations": validation.messages(),
            }))?
        }
        Command::Overtime {
            monthly_salary,
            overtime_hours,
        } => {
            let pay = compute_overtime_pay_with(monthly_salary, overtime_hours, &config.payroll)
                .map_err(AppError::from)?;
            serde_json::to_string_pretty(&json!({ "overtimePay": pay }))?
        }
        Command::Hours {
            clock_in,
            clock_out,
        } => {
            let summary =
                close_clock_record_with(clock_in, clock_out, config.payroll.standard_daily_hours)
                    .map_err(AppError::from)?;
            serde_json::to_string_pretty(&summary)?
        }
        Command::Demo => serde_json::to_string_pretty(&run_demo(config, now)?)?,
    };
    Ok(output)
}

fn outcome_label(outcome: &LoginOutcome) -> Value {
    match outcome {
        LoginOutcome::Authenticated { expiry_warning, .. } => {
            json!({ "status": "authenticated", "expiryWarningDays": expiry_warning })
        }
        LoginOutcome::PasswordChangeRequired { reason, .. } => {
            json!({ "status": "password_change_required", "reason": reason })
        }
    }
}

/// Walk one new hire through onboarding, a long shift and a payment request
fn run_demo(config: &AdminConfig, now: i64) -> anyhow::Result<Value> {
    let directory = demo_directory(&config.policy, now);
    let mut service = CredentialService::new(directory, config.policy.clone());

    let admin_login = service
        .authenticate("admin@hospital.com", "Admin@123", now)
        .map_err(AppError::from)?;

    let (account, secret) = service.provision(
        NewAccount {
            email: "grace@hospital.com".to_string(),
            display_name: "Grace Wanjiru".to_string(),
            role: Role::Nurse,
        },
        now,
    )
    .map_err(AppError::from)?;
    let first_login = service
        .authenticate(&account.email, secret.expose(), now)
        .map_err(AppError::from)?;

    let new_password = "Ward7#Night";
    service.change_password(
        PasswordChange {
            email: account.email.clone(),
            current_password: secret.expose().to_string(),
            new_password: new_password.to_string(),
            confirm_password: new_password.to_string(),
        },
        now,
    )
    .map_err(AppError::from)?;
    let second_login = service
        .authenticate(&account.email, new_password, now)
        .map_err(AppError::from)?;

    let mut record = open_clock_record(account.id, account.display_name.as_str(), now);
    close_record(&mut record, now + 10 * HOUR_MILLIS, &config.payroll).map_err(AppError::from)?;

    let request = build_payment_request(
        PaymentRequestCreate {
            employee_id: account.id,
            employee_name: account.display_name.clone(),
            monthly_salary: 48_000.0,
            amount: 5_000.0,
            reason: "Mid-month advance".to_string(),
            bank_details: String::new(),
            calculation: PayCalculation::WithOvertime,
        },
        std::slice::from_ref(&record),
        &config.payroll,
        now,
    )
    .map_err(AppError::from)?;

    Ok(json!({
        "accounts": service.directory().len(),
        "adminLogin": outcome_label(&admin_login),
        "firstLogin": outcome_label(&first_login),
        "afterPasswordChange": outcome_label(&second_login),
        "clockRecord": record,
        "paymentRequest": request,
    }))
}
