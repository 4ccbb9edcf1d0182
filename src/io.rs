use crate::schedule::ScheduleEntry;
use csv::WriterBuilder;
use std::fs;
use std::path::Path;

/// Export CSV du planning: header `date,weekday,supervisor,shift,time,color`
pub fn export_schedule_csv<P: AsRef<Path>>(
    path: P,
    entries: &[ScheduleEntry],
) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record(["date", "weekday", "supervisor", "shift", "time", "color"])?;
    for e in entries {
        let date = e.date.format("%Y-%m-%d").to_string();
        w.write_record([
            date.as_str(),
            e.weekday.as_str(),
            e.supervisor.as_str(),
            e.assignment.name.as_str(),
            e.assignment.time.as_str(),
            e.assignment.color.as_str(),
        ])?;
    }
    w.flush()?;
    Ok(())
}

/// Export JSON du planning (jolie mise en forme)
pub fn export_schedule_json<P: AsRef<Path>>(
    path: P,
    entries: &[ScheduleEntry],
) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(entries)?;
    fs::write(path, s)?;
    Ok(())
}
