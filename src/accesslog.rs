//! One Common Log Format line per request, as per
//! <https://httpd.apache.org/docs/2.4/logs.html>, with the handling
//! duration appended. Emitted through `tracing` under the `access`
//! target so the env filter can switch it off.

use std::time::Duration;

use chrono::{DateTime, Datelike, Timelike, Utc};
use rouille::Request;
use tracing::info;

static MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

// "06/Dec/2023:02:02:47 +0000"
pub fn format_clf_time(time: DateTime<Utc>) -> String {
    format!(
        "{:02}/{}/{:04}:{:02}:{:02}:{:02} +0000",
        time.day(),
        MONTHS[time.month0() as usize],
        time.year(),
        time.hour(),
        time.minute(),
        time.second()
    )
}

pub fn log_request(request: &Request, status_code: u16, duration: Duration) {
    info!(
        target: "access",
        "{} - - [{}] \"{} {} HTTP/1.1\" {} - {}ms",
        request.remote_addr().ip(),
        format_clf_time(Utc::now()),
        request.method(),
        request.raw_url(),
        status_code,
        duration.as_millis(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn t_format_clf_time() {
        let time = Utc.with_ymd_and_hms(2023, 12, 6, 2, 2, 47).unwrap();
        assert_eq!(format_clf_time(time), "06/Dec/2023:02:02:47 +0000");
        let time = Utc.with_ymd_and_hms(2026, 1, 31, 23, 59, 0).unwrap();
        assert_eq!(format_clf_time(time), "31/Jan/2026:23:59:00 +0000");
    }
}
