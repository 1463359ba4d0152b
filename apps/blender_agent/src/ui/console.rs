use std::fmt::Display;
use std::io::{self, BufRead, Stdout, StdinLock, Write};

use blender_bridge_core::NameRegistry;

/// Line-oriented terminal over any reader and writer.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn say(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{text}")?;
        self.output.flush()
    }

    /// Read one trimmed line. `None` at end of input.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    pub fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Ask until the answer is yes/y/no/n. End of input means no.
    pub fn confirm(&mut self, question: &str) -> io::Result<bool> {
        loop {
            let Some(answer) = self.prompt(&format!("\n{question} (yes/no): "))? else {
                return Ok(false);
            };
            match answer.to_lowercase().as_str() {
                "yes" | "y" => return Ok(true),
                "no" | "n" => return Ok(false),
                _ => self.say("Please enter 'yes' or 'no'")?,
            }
        }
    }

    /// Print a numbered list of `names`.
    pub fn list(&mut self, names: &[String]) -> io::Result<()> {
        for (i, name) in names.iter().enumerate() {
            self.say(format!("  {}. {}", i + 1, name))?;
        }
        Ok(())
    }

    /// Let the user pick a registered object by name or 1-based number.
    ///
    /// After an invalid entry the next answer is either `cancel` or another
    /// attempt.
    pub fn choose_object(&mut self, registry: &NameRegistry, verb: &str) -> io::Result<Option<String>> {
        if registry.is_empty() {
            self.say(format!("No objects available to {verb}."))?;
            return Ok(None);
        }

        self.say(format!("\nWhich object would you like to {verb}?"))?;
        self.say("Available objects:")?;
        self.list(registry.objects())?;

        let mut prompt = "Enter object name or number: ";
        loop {
            let Some(choice) = self.prompt(prompt)? else {
                return Ok(None);
            };
            if choice.eq_ignore_ascii_case("cancel") {
                return Ok(None);
            }
            if registry.contains(&choice) {
                return Ok(Some(choice));
            }
            match choice.parse::<usize>() {
                Ok(number) => match registry.get(number) {
                    Some(name) => return Ok(Some(name.to_string())),
                    None => self.say(format!("Invalid number. Please enter 1-{}", registry.len()))?,
                },
                Err(_) => self.say("Invalid input. Please enter a valid object name or number.")?,
            }
            prompt = "Type 'cancel' to abort, or try again: ";
        }
    }
}
