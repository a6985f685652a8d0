use flexi_logger::{DeferredNow, style};
use log::Record;

/// `LEVEL message`, with the level coloured.
pub fn cli_format(
    w: &mut dyn std::io::Write,
    _now: &mut DeferredNow,
    record: &Record,
) -> std::io::Result<()> {
    let level = record.level();
    write!(w, "{} {}", style(level).paint(level.to_string()), record.args())
}
