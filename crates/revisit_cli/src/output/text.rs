//! Text output formatter

use revisit_core::{PassOutput, PassReport};

pub fn output_text(reports: &[PassReport]) {
    for (index, report) in reports.iter().enumerate() {
        if index > 0 {
            println!();
        }

        println!("{}:", report.operation);
        match &report.output {
            PassOutput::Lines(lines) => {
                for line in lines {
                    println!("  {}", line);
                }
            }
            PassOutput::Counts(counts) => {
                for (kind, count) in counts {
                    println!("  {}: {}", kind, count);
                }
            }
            PassOutput::Values(values) => {
                println!("  {}", values.join(" "));
            }
        }
    }
}
