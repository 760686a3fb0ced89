//! Dependency Inversion Principle
//!
//! Depend on the `Database` abstraction, not on a concrete driver.

use std::io::{self, Write};

// Bad: callers are welded to this concrete type
pub struct MySql;

impl MySql {
    pub fn connect(&self) -> String {
        "Connected to Bad MySql Database".to_string()
    }
}

// Good
pub trait Database {
    fn connect(&self) -> String;
}

pub struct MySqlDatabase;

impl Database for MySqlDatabase {
    fn connect(&self) -> String {
        "Connected to Good MySql Database".to_string()
    }
}

pub struct PostgresDatabase;

impl Database for PostgresDatabase {
    fn connect(&self) -> String {
        "Connected to Good Postgres Database".to_string()
    }
}

pub fn run(out: &mut dyn Write) -> io::Result<()> {
    let my_sql = MySql;
    writeln!(out, "{}", my_sql.connect())?;

    let databases: [Box<dyn Database>; 2] = [Box::new(MySqlDatabase), Box::new(PostgresDatabase)];
    for database in &databases {
        writeln!(out, "{}", database.connect())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct InMemory;

    impl Database for InMemory {
        fn connect(&self) -> String {
            "Connected to in-memory Database".to_string()
        }
    }

    fn start(db: &dyn Database) -> String {
        db.connect()
    }

    #[test]
    fn test_high_level_code_accepts_any_database() {
        assert_eq!(start(&InMemory), "Connected to in-memory Database");
        assert_eq!(start(&PostgresDatabase), "Connected to Good Postgres Database");
    }

    #[test]
    fn test_transcript() {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Connected to Bad MySql Database\n\
             Connected to Good MySql Database\n\
             Connected to Good Postgres Database\n"
        );
    }
}
