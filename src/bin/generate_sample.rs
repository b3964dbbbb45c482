use std::path::PathBuf;

use anyhow::{Context, Result};

use cgpa_leaderboard::config::DEFAULT_DATASET_PATH;
use cgpa_leaderboard::data::loader::{
    CGPA_COLUMN, COURSE_COLUMN, NAME_COLUMN, SECTION_COLUMN, SEMESTER_COLUMN,
};

const FIRST_NAMES: [&str; 12] = [
    "Aarav", "Ananya", "Bhavya", "Diya", "Ishaan", "Kavya", "Meera", "Nikhil", "Priya", "Rohan",
    "Sana", "Vikram",
];
const LAST_NAMES: [&str; 8] = ["Shetty", "Rao", "Nair", "Kamath", "Pai", "Menon", "Hegde", "Bhat"];
const COURSES: [&str; 5] = ["CSE", "ECE", "MECH", "CIVIL", "IT"];
const SECTIONS: [&str; 4] = ["A", "B", "C", "D"];
const ROMAN: [&str; 10] = ["I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X"];

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[(self.next_u64() % items.len() as u64) as usize]
    }
}

/// Semester label in one of the spellings seen in real exports.
fn semester_label(rng: &mut SimpleRng) -> String {
    let n = (rng.next_u64() % 8) as usize + 1;
    match rng.next_u64() % 10 {
        0 => String::new(),
        1..=4 => ROMAN[n - 1].to_string(),
        5 => ROMAN[n - 1].to_lowercase(),
        _ => n.to_string(),
    }
}

fn cgpa_text(rng: &mut SimpleRng) -> String {
    if rng.next_u64() % 50 == 0 {
        return "N/A".to_string();
    }
    // Skewed towards the upper half, like real grade sheets.
    let cgpa = 10.0 - 7.0 * rng.next_f64().powf(1.6);
    format!("{cgpa:.2}")
}

fn main() -> Result<()> {
    env_logger::init();

    let output_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATASET_PATH));
    let rows: usize = 1200;

    let mut rng = SimpleRng::new(42);
    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("creating {}", output_path.display()))?;

    writer.write_record([
        NAME_COLUMN,
        COURSE_COLUMN,
        SECTION_COLUMN,
        SEMESTER_COLUMN,
        CGPA_COLUMN,
    ])?;

    for _ in 0..rows {
        let name = format!("{} {}", rng.pick(&FIRST_NAMES), rng.pick(&LAST_NAMES));
        let course = rng.pick(&COURSES);
        let section = rng.pick(&SECTIONS);
        let semester = semester_label(&mut rng);
        let cgpa = cgpa_text(&mut rng);
        writer.write_record([name.as_str(), course, section, semester.as_str(), cgpa.as_str()])?;
    }
    writer.flush().context("flushing CSV")?;

    log::info!("Wrote {rows} students to {}", output_path.display());
    println!("Wrote {rows} students to {}", output_path.display());
    Ok(())
}
