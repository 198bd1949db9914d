use roster_types::*;

/// Printed in place of a record when a lookup finds nothing.
pub const ABSENT: &str = "<nil>";

pub fn format_record(record: Option<&Record>) -> String {
    match record {
        Some(record) => format!("{}, age {}", record.display_name(), record.age),
        None => ABSENT.to_string(),
    }
}

pub fn format_records(records: &[Record]) -> String {
    if records.is_empty() {
        return "No records".to_string();
    }
    records
        .iter()
        .enumerate()
        .map(|(i, r)| format!("{:>3}  {}", i, format_record(Some(r))))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_auth_result(result: &AuthResult) -> String {
    if result.authenticated {
        "authenticated".to_string()
    } else {
        "rejected".to_string()
    }
}

pub fn format_info(info: &ServiceInfo) -> String {
    [
        format!("records:      {}", info.records),
        format!("adults:       {}", info.adults),
        format!("max records:  {} (not enforced)", info.max_records),
        format!("default role: {}", info.default_role),
        format!("placeholder:  {}", format_record(Some(&info.placeholder))),
    ]
    .join("\n")
}
