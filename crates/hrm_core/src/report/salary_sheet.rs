//! Monthly pay bill.
//!
//! # Invariants
//! - Totals are always summed from line items, never entered by hand.
//! - `net_pay = total_payment - total_deduction`; may be negative.
//! - Printed rows pair payments and deductions index by index, padded to the
//!   longer list.

use super::employee_sheet::CompanyProfile;
use super::html::escape;
use crate::model::employee::EmployeeListing;
use crate::model::money::Money;
use chrono::NaiveDate;

/// Payment heads printed on every pay bill, in order.
pub const PAYMENT_HEADS: &[&str] = &[
    "Basic Pay",
    "Special Benefit",
    "House Rent Allowance",
    "Medical Allowance",
    "Dearness Allowance",
    "Charge Allowance",
    "Festival Allowance",
    "Book Allowance",
    "Telephone Allowance",
    "Child Allowance",
    "Other",
];

/// Deduction heads printed on every pay bill, in order.
pub const DEDUCTION_HEADS: &[&str] = &[
    "Provident Fund",
    "Provident Fund Loan",
    "Hospital Insurance",
    "PF Loan Interest",
    "Group Insurance",
    "Benevolent Fund",
    "Vehicle Charge",
    "Private Vehicle Use",
    "House Loan",
    "Association Contribution",
    "Deduction on Salary",
    "Other Contribution/Donation",
    "Income Tax",
    "Telephone Deduction",
    "Utility Bill",
    "Revenue Stamp",
    "House Loan Interest",
    "Other",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    pub label: String,
    pub amount: Money,
}

impl LineItem {
    pub fn new(label: impl Into<String>, amount: Money) -> Self {
        Self {
            label: label.into(),
            amount,
        }
    }
}

/// One printed row: a payment beside a deduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SalarySheetRow<'a> {
    pub payment: Option<&'a LineItem>,
    pub deduction: Option<&'a LineItem>,
}

/// Pay bill for one employee and one month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalarySheet {
    pub employee_name: String,
    pub pf_number: String,
    pub designation: Option<String>,
    /// First day of the billed month.
    pub period: NaiveDate,
    pub payments: Vec<LineItem>,
    pub deductions: Vec<LineItem>,
}

impl SalarySheet {
    /// Starts a pay bill with every standard head at zero and basic pay
    /// taken from the employee record.
    ///
    /// Returns `None` when `year`/`month` is not a valid month.
    pub fn for_employee(listing: &EmployeeListing, year: i32, month: u32) -> Option<Self> {
        let period = NaiveDate::from_ymd_opt(year, month, 1)?;
        let mut sheet = Self {
            employee_name: listing.employee.name.clone(),
            pf_number: listing.employee.pf_number.clone(),
            designation: listing.designation_name.clone(),
            period,
            payments: heads(PAYMENT_HEADS),
            deductions: heads(DEDUCTION_HEADS),
        };

        if let Some(basic) = listing.employee.basic_salary {
            sheet.set_payment(PAYMENT_HEADS[0], basic);
        }
        Some(sheet)
    }

    /// Sets (or appends) a payment head.
    pub fn set_payment(&mut self, label: &str, amount: Money) {
        set_item(&mut self.payments, label, amount);
    }

    /// Sets (or appends) a deduction head.
    pub fn set_deduction(&mut self, label: &str, amount: Money) {
        set_item(&mut self.deductions, label, amount);
    }

    pub fn total_payment(&self) -> Money {
        self.payments.iter().map(|item| item.amount).sum()
    }

    pub fn total_deduction(&self) -> Money {
        self.deductions.iter().map(|item| item.amount).sum()
    }

    pub fn net_pay(&self) -> Money {
        self.total_payment() - self.total_deduction()
    }

    pub fn rows(&self) -> Vec<SalarySheetRow<'_>> {
        let len = self.payments.len().max(self.deductions.len());
        (0..len)
            .map(|index| SalarySheetRow {
                payment: self.payments.get(index),
                deduction: self.deductions.get(index),
            })
            .collect()
    }

    /// `For the Month of January, 2026`.
    pub fn period_label(&self) -> String {
        self.period.format("For the Month of %B, %Y").to_string()
    }

    pub fn render_html(&self, company: &CompanyProfile) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "<section class=\"print-area salary-sheet\"><div class=\"salary-header\">\
             <h1>{}</h1><p>{}</p><h2>Monthly Pay Bill</h2><p>{}</p></div>",
            escape(&company.name),
            escape(&company.address),
            escape(&self.period_label())
        ));
        out.push_str(&format!(
            "<div class=\"salary-meta\"><p><strong>Name:</strong> {}</p>\
             <p><strong>PF No:</strong> {}</p><p><strong>Designation:</strong> {}</p></div>",
            escape(&self.employee_name),
            escape(&self.pf_number),
            escape(self.designation.as_deref().unwrap_or("-"))
        ));

        out.push_str(
            "<table class=\"salary-table\"><thead><tr><th>Payments</th><th>Amount</th>\
             <th>Deductions</th><th>Amount</th></tr></thead><tbody>",
        );
        for row in self.rows() {
            let (pay_label, pay_amount) = cells(row.payment);
            let (ded_label, ded_amount) = cells(row.deduction);
            out.push_str(&format!(
                "<tr><td>{}</td><td class=\"amount\">{}</td><td>{}</td><td class=\"amount\">{}</td></tr>",
                escape(&pay_label),
                pay_amount,
                escape(&ded_label),
                ded_amount
            ));
        }
        out.push_str(&format!(
            "</tbody><tfoot><tr><th>Total Payment</th><th class=\"amount\">{}</th>\
             <th>Total Deduction</th><th class=\"amount\">{}</th></tr>\
             <tr><th colspan=\"3\">Net Pay</th><th class=\"amount\">{}</th></tr></tfoot></table></section>",
            self.total_payment(),
            self.total_deduction(),
            self.net_pay()
        ));
        out
    }
}

fn heads(labels: &[&str]) -> Vec<LineItem> {
    labels
        .iter()
        .map(|label| LineItem::new(*label, Money::ZERO))
        .collect()
}

fn set_item(items: &mut Vec<LineItem>, label: &str, amount: Money) {
    match items.iter_mut().find(|item| item.label == label) {
        Some(item) => item.amount = amount,
        None => items.push(LineItem::new(label, amount)),
    }
}

fn cells(item: Option<&LineItem>) -> (String, String) {
    match item {
        Some(item) => (item.label.clone(), item.amount.to_string()),
        None => (String::new(), String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::{SalarySheet, DEDUCTION_HEADS, PAYMENT_HEADS};
    use crate::model::employee::{Employee, EmployeeListing};
    use crate::model::money::Money;
    use crate::report::employee_sheet::CompanyProfile;

    fn listing() -> EmployeeListing {
        let mut employee = Employee::new("Habibur Rahaman", "2125");
        employee.basic_salary = Some(Money::from_major(19_460));
        EmployeeListing {
            employee,
            department_name: None,
            designation_name: Some("Section Officer".to_string()),
        }
    }

    fn january_bill() -> SalarySheet {
        let mut sheet = SalarySheet::for_employee(&listing(), 2026, 1).unwrap();
        sheet.set_payment("Special Benefit", Money::from_major(2_919));
        sheet.set_payment("House Rent Allowance", Money::from_major(10_703));
        sheet.set_payment("Medical Allowance", Money::from_major(1_500));
        sheet.set_payment("Child Allowance", Money::from_major(500));

        for (label, amount) in [
            ("Provident Fund", 1_946),
            ("Hospital Insurance", 219),
            ("Group Insurance", 138),
            ("Benevolent Fund", 195),
            ("Vehicle Charge", 500),
            ("Private Vehicle Use", 200),
            ("House Loan", 18_333),
            ("Association Contribution", 25),
            ("Other Contribution/Donation", 188),
            ("Revenue Stamp", 10),
        ] {
            sheet.set_deduction(label, Money::from_major(amount));
        }
        sheet
    }

    #[test]
    fn totals_and_net_pay_are_computed() {
        let sheet = january_bill();
        assert_eq!(sheet.total_payment().to_string(), "35,082.00");
        assert_eq!(sheet.total_deduction().to_string(), "21,754.00");
        assert_eq!(sheet.net_pay().to_string(), "13,328.00");
    }

    #[test]
    fn rows_pad_to_longer_list() {
        let sheet = january_bill();
        let rows = sheet.rows();
        assert_eq!(rows.len(), DEDUCTION_HEADS.len());
        assert!(rows[PAYMENT_HEADS.len()].payment.is_none());
        assert!(rows[PAYMENT_HEADS.len()].deduction.is_some());
    }

    #[test]
    fn invalid_month_yields_none() {
        assert!(SalarySheet::for_employee(&listing(), 2026, 13).is_none());
    }

    #[test]
    fn unknown_heads_are_appended() {
        let mut sheet = january_bill();
        sheet.set_payment("Arrear", Money::from_major(100));
        assert_eq!(sheet.payments.len(), PAYMENT_HEADS.len() + 1);
        assert_eq!(sheet.total_payment().to_string(), "35,182.00");
    }

    #[test]
    fn html_lists_period_and_totals() {
        let company = CompanyProfile {
            name: "National University".to_string(),
            address: "Gazipur-1704, Bangladesh".to_string(),
            ..CompanyProfile::default()
        };
        let html = january_bill().render_html(&company);
        assert!(html.contains("For the Month of January, 2026"));
        assert!(html.contains("13,328.00"));
        assert!(html.contains("Section Officer"));
    }

    #[test]
    fn html_renders_saturated_totals() {
        let mut sheet = january_bill();
        sheet.set_payment("Other", Money::from_minor(i64::MAX));
        assert_eq!(sheet.total_payment(), Money::from_minor(i64::MAX));

        let html = sheet.render_html(&CompanyProfile::default());
        assert!(html.contains(&Money::from_minor(i64::MAX).to_string()));
        assert!(html.ends_with("</tfoot></table></section>"));
    }
}
