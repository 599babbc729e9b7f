//! Interactive roster menu.

use std::io::{self, BufRead, Write};

use campus_core::{Console, StudentRecord};

use crate::students::{self, StudentStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddStudent,
    ListStudents,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::AddStudent),
            "2" => Some(Self::ListStudents),
            "3" => Some(Self::Exit),
            _ => None,
        }
    }
}

const OPTIONS: &str = "\
1. Add a new student
2. List all students
3. Exit";

pub struct RosterMenu<'a, S: ?Sized> {
    store: &'a S,
}

impl<'a, S: StudentStore + ?Sized> RosterMenu<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Run until the user picks Exit or input ends.
    pub async fn run<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> io::Result<()> {
        loop {
            console.say("")?;
            console.say("Campus roster:")?;
            console.say(OPTIONS)?;

            let Some(input) = console.prompt("Choose an option: ")? else {
                break;
            };

            match MenuChoice::parse(&input) {
                Some(MenuChoice::AddStudent) => self.add_student(console).await?,
                Some(MenuChoice::ListStudents) => self.list_students(console).await?,
                Some(MenuChoice::Exit) => break,
                None => console.say("Invalid option")?,
            }
        }
        Ok(())
    }

    async fn add_student<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> io::Result<()> {
        console.say("Adding a new student")?;
        let Some(name) = console.prompt("Enter the student's name: ")? else {
            return Ok(());
        };
        let Some(raw_age) = console.prompt("Enter the student's age: ")? else {
            return Ok(());
        };

        let age = match students::parse_age(&raw_age) {
            Ok(age) => age,
            Err(_) => return console.say(format!("Invalid age: {raw_age}")),
        };

        match students::add_student(self.store, &StudentRecord::new(name, age)).await {
            Ok(_) => console.say("Student added successfully!"),
            Err(e) => {
                tracing::debug!(error = %e, "Adding student failed");
                console.say(format!("Error adding student: {e}"))
            }
        }
    }

    async fn list_students<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> io::Result<()> {
        match students::list_students(self.store).await {
            Ok(names) => {
                console.say("Students:")?;
                for name in names {
                    console.say(name)?;
                }
                Ok(())
            }
            Err(e) => {
                tracing::debug!(error = %e, "Listing students failed");
                console.say(format!("Error listing students: {e}"))
            }
        }
    }
}
