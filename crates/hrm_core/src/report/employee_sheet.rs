//! Employee information sheet (A4, print optimized).
//!
//! # Responsibility
//! - Project an [`EmployeeListing`] into the four labelled sections of the
//!   sheet: job, personal, address and payroll/bank.
//! - Derive PRL date and remaining service from the date of birth.
//!
//! # Invariants
//! - Blank values render as `-`.
//! - The PRL date is recomputed on every build, never read from storage.

use super::html::{escape, push_label_table};
use crate::dates::{
    format_iso_date, remaining_duration_text, Clock, DurationLabels,
    DEFAULT_RETIREMENT_OFFSET_YEARS,
};
use crate::model::employee::EmployeeListing;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Document number printed in the sheet header.
pub const EMPLOYEE_SHEET_DOC_NO: &str = "HR-EMP-INFO";

const BLANK_VALUE: &str = "-";

/// Letterhead details printed on every report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    #[serde(default)]
    pub logo_url: Option<String>,
}

/// Knobs for sheet derivations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetOptions {
    pub retirement_offset_years: u32,
    pub labels: DurationLabels,
}

impl Default for SheetOptions {
    fn default() -> Self {
        Self {
            retirement_offset_years: DEFAULT_RETIREMENT_OFFSET_YEARS,
            labels: DurationLabels::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetRow {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetSection {
    pub title: &'static str,
    pub rows: Vec<SheetRow>,
}

impl SheetSection {
    /// Looks up a row value by label.
    pub fn value(&self, label: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|row| row.label == label)
            .map(|row| row.value.as_str())
    }
}

/// Fully derived employee information sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeInfoSheet {
    pub company: CompanyProfile,
    pub pf_number: String,
    pub issue_date: NaiveDate,
    pub prl_date: Option<NaiveDate>,
    pub job: SheetSection,
    pub personal: SheetSection,
    pub address: SheetSection,
    pub payroll: SheetSection,
}

impl EmployeeInfoSheet {
    pub fn build<C: Clock>(
        listing: &EmployeeListing,
        company: &CompanyProfile,
        clock: &C,
        options: &SheetOptions,
    ) -> Self {
        let employee = &listing.employee;
        let prl_date = employee.retirement_date(options.retirement_offset_years);

        let job = section(
            "Job Information",
            vec![
                row("PF No.", Some(employee.pf_number.as_str())),
                row("Full Name", Some(employee.name.as_str())),
                row("Department", listing.department_name.as_deref()),
                row("Designation", listing.designation_name.as_deref()),
                date_row("Joining Date", employee.joining_date),
                row("Employment Type", employee.employee_type.as_deref()),
                row("Status", employee.employee_status.as_deref()),
            ],
        );

        let personal = section(
            "Personal Information",
            vec![
                row("Phone", employee.mobile_number.as_deref()),
                row("Email", employee.email.as_deref()),
                date_row("Date of Birth", employee.dob),
                row("NID", employee.nid.as_deref()),
                row("Gender", employee.gender.as_deref()),
                row("Blood Group", employee.blood_group.as_deref()),
                date_row("PRL Date", prl_date),
                SheetRow {
                    label: "Remaining Service",
                    value: remaining_duration_text(prl_date, clock, &options.labels),
                },
            ],
        );

        let address = section(
            "Address",
            vec![
                row("Present Address", employee.present_address.as_deref()),
                row("Permanent Address", employee.permanent_address.as_deref()),
                row("Home District", employee.home_district.as_deref()),
            ],
        );

        let salary = employee.basic_salary.map(|amount| amount.to_string());
        let payroll = section(
            "Payroll / Bank",
            vec![
                row("Basic Salary", salary.as_deref()),
                row("Bank Name", employee.bank_name.as_deref()),
                row("Account No.", employee.account_no.as_deref()),
                row("Branch", employee.bank_branch.as_deref()),
            ],
        );

        Self {
            company: company.clone(),
            pf_number: employee.pf_number.clone(),
            issue_date: clock.today(),
            prl_date,
            job,
            personal,
            address,
            payroll,
        }
    }

    pub fn sections(&self) -> [&SheetSection; 4] {
        [&self.job, &self.personal, &self.address, &self.payroll]
    }

    /// File/document title for the print surface.
    pub fn document_title(&self) -> String {
        if self.pf_number.trim().is_empty() {
            "employee-info".to_string()
        } else {
            format!("employee-{}", self.pf_number.trim())
        }
    }

    /// Renders the sheet as a static HTML fragment.
    pub fn render_html(&self) -> String {
        let mut out = String::new();
        out.push_str("<div class=\"a4 print-area\"><header class=\"header\">");

        match self.company.logo_url.as_deref().filter(|url| !url.is_empty()) {
            Some(url) => {
                out.push_str(&format!(
                    "<img class=\"logo\" src=\"{}\" alt=\"logo\" />",
                    escape(url)
                ));
            }
            None => out.push_str("<div class=\"logoPlaceholder\">LOGO</div>"),
        }

        out.push_str(&format!(
            "<div class=\"headerCenter\"><div class=\"companyName\">{}</div>\
             <div class=\"companyMeta\">{} &bull; {} &bull; {}</div>\
             <div class=\"docTitle\">EMPLOYEE INFORMATION SHEET</div></div>",
            escape(&self.company.name),
            escape(&self.company.address),
            escape(&self.company.phone),
            escape(&self.company.email)
        ));
        out.push_str(&format!(
            "<div class=\"metaBox\"><div>Doc No: <b>{EMPLOYEE_SHEET_DOC_NO}</b></div>\
             <div>Issue: <b>{}</b></div></div></header><main>",
            format_iso_date(Some(self.issue_date))
        ));

        for section in self.sections() {
            out.push_str(&format!(
                "<div class=\"section\"><div class=\"sectionTitle\">{}</div>",
                escape(section.title)
            ));
            push_label_table(
                &mut out,
                section
                    .rows
                    .iter()
                    .map(|row| (row.label, row.value.as_str())),
            );
            out.push_str("</div>");
        }

        out.push_str(
            "<div class=\"signRow\">\
             <div class=\"signBox\"><div class=\"signLine\"></div>Employee Signature</div>\
             <div class=\"signBox\"><div class=\"signLine\"></div>HR / Authorized Signature</div>\
             </div></main><footer class=\"footer\">Confidential &bull; For internal use only</footer></div>",
        );
        out
    }
}

fn section(title: &'static str, rows: Vec<SheetRow>) -> SheetSection {
    SheetSection { title, rows }
}

fn row(label: &'static str, value: Option<&str>) -> SheetRow {
    let value = value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(BLANK_VALUE);
    SheetRow {
        label,
        value: value.to_string(),
    }
}

fn date_row(label: &'static str, date: Option<NaiveDate>) -> SheetRow {
    SheetRow {
        label,
        value: format_iso_date(date),
    }
}
