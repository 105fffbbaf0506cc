use std::io::{self, Write};

use crate::session::HistoryEntry;

pub const HISTORY_CSV_HEADER: &str =
    "round,brand1_strategy,brand2_strategy,profit1,profit2,market_share1,market_share2,equilibrium\n";

pub struct HistoryCsvWriter<W: Write> {
    writer: W,
}

impl<W: Write> HistoryCsvWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_header(&mut self) -> io::Result<()> {
        self.writer.write_all(HISTORY_CSV_HEADER.as_bytes())
    }

    pub fn append_entries(&mut self, entries: &[HistoryEntry]) -> io::Result<()> {
        for entry in entries {
            writeln!(
                self.writer,
                "{},{},{},{},{},{:.4},{:.4},{}",
                entry.round,
                entry.brand1_choice.as_str(),
                entry.brand2_choice.as_str(),
                entry.result.profit1,
                entry.result.profit2,
                entry.result.market_share1,
                entry.result.market_share2,
                entry.equilibrium,
            )?;
        }
        self.writer.flush()
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Renders a full export: header followed by one row per entry.
pub fn history_csv(entries: &[HistoryEntry]) -> io::Result<String> {
    let mut writer = HistoryCsvWriter::new(Vec::new());
    writer.write_header()?;
    writer.append_entries(entries)?;
    String::from_utf8(writer.into_inner())
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
}

#[cfg(test)]
mod tests {
    use std::io;

    use core_game::RoundResult;
    use strategy::Strategy;

    use super::{history_csv, HistoryCsvWriter, HISTORY_CSV_HEADER};
    use crate::session::HistoryEntry;

    struct FailingWriter;

    impl io::Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn sample_entry() -> HistoryEntry {
        HistoryEntry {
            round: 3,
            brand1_choice: Strategy::Raise,
            brand2_choice: Strategy::Lower,
            result: RoundResult {
                profit1: 2_000,
                profit2: 10_000,
                market_share1: 2_000.0 / 12_000.0,
                market_share2: 10_000.0 / 12_000.0,
            },
            equilibrium: false,
        }
    }

    #[test]
    fn empty_history_exports_header_only() {
        let csv = history_csv(&[]).unwrap();

        assert_eq!(csv, HISTORY_CSV_HEADER);
    }

    #[test]
    fn rows_use_wire_names_and_four_decimal_shares() {
        let csv = history_csv(&[sample_entry()]).unwrap();

        assert_eq!(
            csv,
            format!("{HISTORY_CSV_HEADER}3,raise,lower,2000,10000,0.1667,0.8333,false\n")
        );
    }

    #[test]
    fn write_errors_are_propagated() {
        let mut writer = HistoryCsvWriter::new(FailingWriter);

        let err = writer.write_header().unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::Other);
    }
}
