//! The menu-driven interactive guide
//!
//! [`Guide`] is generic over its input and output so sessions can be scripted
//! in tests with a `Cursor` and a `Vec<u8>`. Menus are loops, not recursion;
//! closing the input ends the session cleanly.

use std::io::{BufRead, Write};

use crate::config::GuideConfig;
use crate::content::{self, MenuEntry, Topic, TrigTopic, MAIN_MENU, TRIG_MENU};
use crate::{GuideError, Result};

mod calculators;
mod screens;

/// ANSI: clear screen and move the cursor home
const CLEAR_SCREEN: &str = "\x1B[2J\x1B[H";

/// Interactive session state
pub struct Guide<R, W> {
    input: R,
    out: W,
    config: GuideConfig,
}

impl<R: BufRead, W: Write> Guide<R, W> {
    pub fn new(input: R, out: W, config: GuideConfig) -> Self {
        Self { input, out, config }
    }

    pub fn config(&self) -> &GuideConfig {
        &self.config
    }

    /// Consumes the guide, returning the output sink
    pub fn into_output(self) -> W {
        self.out
    }

    /// Runs the main menu until the user exits or input ends
    pub fn run(&mut self) -> Result<()> {
        match self.main_menu() {
            Err(GuideError::EndOfInput) => {
                log::debug!("input closed, leaving guide");
                writeln!(self.out)?;
                Ok(())
            }
            other => other,
        }
    }

    fn main_menu(&mut self) -> Result<()> {
        loop {
            self.clear_screen()?;
            writeln!(self.out, "=== PRECALCULUS COMPLETE GUIDE ===")?;
            writeln!(self.out, "\nSelect a topic to explore:")?;
            self.print_menu(&MAIN_MENU)?;

            let choice = self.prompt("\nEnter your choice (1-9): ")?;
            match content::select(&MAIN_MENU, &choice) {
                Some(Topic::Exit) => {
                    writeln!(self.out, "Goodbye!")?;
                    return Ok(());
                }
                Some(Topic::Trigonometry) => self.trigonometry_menu()?,
                Some(topic) => self.overview_screen(topic)?,
                None => {
                    log::debug!("invalid main menu choice {choice:?}");
                    writeln!(self.out, "Invalid choice. Please try again.")?;
                    self.pause()?;
                }
            }
        }
    }

    fn trigonometry_menu(&mut self) -> Result<()> {
        loop {
            self.clear_screen()?;
            writeln!(self.out, "=== TRIGONOMETRY ===")?;
            writeln!(self.out, "\nSelect a trigonometry topic to explore:")?;
            self.print_menu(&TRIG_MENU)?;

            let choice = self.prompt("\nEnter your choice (1-9): ")?;
            let Some(topic) = content::select(&TRIG_MENU, &choice) else {
                log::debug!("invalid trigonometry menu choice {choice:?}");
                writeln!(self.out, "Invalid choice. Please try again.")?;
                self.pause()?;
                continue;
            };

            self.clear_screen()?;
            match topic {
                TrigTopic::Back => return Ok(()),
                TrigTopic::AngleMeasure => self.angle_measure()?,
                TrigTopic::UnitCircle => self.unit_circle()?,
                TrigTopic::TrigFunctions => self.trig_functions()?,
                TrigTopic::Graphs => self.trig_graphs()?,
                TrigTopic::InverseTrig => self.inverse_trig()?,
                TrigTopic::Identities => self.trig_identities()?,
                TrigTopic::SolvingEquations => self.solving_equations()?,
                TrigTopic::LawOfSinesCosines => self.law_sines_cosines()?,
            }
            self.pause()?;
        }
    }

    fn overview_screen(&mut self, topic: Topic) -> Result<()> {
        self.clear_screen()?;
        if let Some(overview) = content::overview(topic) {
            writeln!(self.out, "=== {} ===", overview.title)?;
            writeln!(self.out, "This section covers:")?;
            for bullet in overview.bullets {
                writeln!(self.out, "- {bullet}")?;
            }
        }
        self.pause()
    }

    fn print_menu<T>(&mut self, menu: &[MenuEntry<T>]) -> Result<()> {
        for entry in menu {
            writeln!(self.out, "{}. {}", entry.key, entry.name)?;
        }
        Ok(())
    }

    /// Writes `text`, then reads one line with the newline stripped
    fn prompt(&mut self, text: &str) -> Result<String> {
        write!(self.out, "{text}")?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(GuideError::EndOfInput);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn clear_screen(&mut self) -> Result<()> {
        if self.config.clear_screen {
            write!(self.out, "{CLEAR_SCREEN}")?;
        }
        Ok(())
    }

    fn pause(&mut self) -> Result<()> {
        if self.config.pause_after_screen {
            self.prompt("\nPress Enter to continue...")?;
        }
        Ok(())
    }

    fn section(&mut self, title: &str) -> Result<()> {
        writeln!(self.out, "\n{title}:")?;
        Ok(())
    }

    /// Bulleted lines; leading spaces in a line indent its bullet
    fn bullets(&mut self, lines: &[&str]) -> Result<()> {
        for line in lines {
            let text = line.trim_start();
            let indent = line.len() - text.len();
            writeln!(self.out, "{:indent$}- {text}", "")?;
        }
        Ok(())
    }

    /// Left-aligned three column table with a dashed rule under the header
    fn table3(
        &mut self,
        header: (&str, &str, &str),
        widths: [usize; 3],
        rows: &[(&str, &str, &str)],
    ) -> Result<()> {
        let [w0, w1, w2] = widths;
        writeln!(self.out, "{:<w0$}{:<w1$}{:<w2$}", header.0, header.1, header.2)?;
        writeln!(self.out, "{}", "-".repeat(w0 + w1 + w2))?;
        for (a, b, c) in rows {
            writeln!(self.out, "{a:<w0$}{b:<w1$}{c:<w2$}")?;
        }
        Ok(())
    }
}
