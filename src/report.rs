use colored::Colorize;

#[derive(Debug, Clone)]
pub enum Status {
    Pass,
    Fail,
    Warn,
}

#[derive(Debug, Clone)]
pub struct Finding {
    pub line: Option<usize>,
    pub message: String,
    pub status: Status,
}

pub struct Report {
    pub findings: Vec<Finding>,
}

impl Report {
    pub fn new() -> Self {
        Report { findings: Vec::new() }
    }

    pub fn add(&mut self, line: Option<usize>, message: &str, status: Status) {
        self.findings.push(Finding {
            line,
            message: message.to_string(),
            status,
        });
    }

    pub fn pass(&mut self, line: Option<usize>, message: &str) {
        self.add(line, message, Status::Pass);
    }

    pub fn fail(&mut self, line: Option<usize>, message: &str) {
        self.add(line, message, Status::Fail);
    }

    pub fn warn(&mut self, line: Option<usize>, message: &str) {
        self.add(line, message, Status::Warn);
    }

    pub fn has_failures(&self) -> bool {
        self.findings.iter().any(|f| matches!(f.status, Status::Fail))
    }

    pub fn print(&self) {
        println!("\n{}", "═══ Source Manifest Report ═══".bold());
        println!();

        for finding in &self.findings {
            let icon = match finding.status {
                Status::Pass => "[PASS]".green().bold(),
                Status::Fail => "[FAIL]".red().bold(),
                Status::Warn => "[WARN]".yellow().bold(),
            };
            match finding.line {
                Some(n) => println!("  {} line {}: {}", icon, n.to_string().bold(), finding.message),
                None => println!("  {} {}", icon, finding.message),
            }
        }

        let fails = self.findings.iter().filter(|f| matches!(f.status, Status::Fail)).count();
        let warns = self.findings.iter().filter(|f| matches!(f.status, Status::Warn)).count();

        println!();
        if fails > 0 {
            println!("  {}", "Manifest is NOT valid.".red().bold());
        } else if warns > 0 {
            println!("  {}", "Manifest is valid (with warnings).".yellow().bold());
        } else {
            println!("  {}", "Manifest is valid.".green().bold());
        }
        println!();
    }
}
