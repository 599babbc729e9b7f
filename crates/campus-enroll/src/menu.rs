//! Interactive enrollment menu.

use std::io::{self, BufRead, Write};

use campus_core::{ClassCode, Console, ReferenceTable, StudentId};

use crate::registration::{self, RegistrationStore};

/// A numbered menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Enroll,
    Unenroll,
    ListClasses,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Enroll),
            "2" => Some(Self::Unenroll),
            "3" => Some(Self::ListClasses),
            "4" => Some(Self::Exit),
            _ => None,
        }
    }
}

const OPTIONS: &str = "\
1. Enroll in class
2. Unenroll from class
3. List student's classes
4. Exit";

/// Menu loop over a registration store and the fixed reference tables.
pub struct EnrollMenu<'a, S: ?Sized> {
    store: &'a S,
    students: &'a ReferenceTable,
    classes: &'a ReferenceTable,
}

impl<'a, S: RegistrationStore + ?Sized> EnrollMenu<'a, S> {
    pub fn new(store: &'a S, students: &'a ReferenceTable, classes: &'a ReferenceTable) -> Self {
        Self {
            store,
            students,
            classes,
        }
    }

    /// Run until the user picks Exit or input ends.
    pub async fn run<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> io::Result<()> {
        loop {
            console.say("")?;
            console.say("Campus enrollment:")?;
            console.say(OPTIONS)?;

            let Some(input) = console.prompt("Choose an option: ")? else {
                break;
            };

            match MenuChoice::parse(&input) {
                Some(MenuChoice::Enroll) => self.enroll(console).await?,
                Some(MenuChoice::Unenroll) => self.unenroll(console).await?,
                Some(MenuChoice::ListClasses) => self.list_classes(console).await?,
                Some(MenuChoice::Exit) => break,
                None => console.say("Invalid option")?,
            }
        }
        Ok(())
    }

    async fn enroll<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> io::Result<()> {
        console.say("Enroll in class")?;
        let Some((student, class)) = self.ask_pair(console)? else {
            return Ok(());
        };

        match registration::enroll(self.store, &student, &class).await {
            Ok(outcome) => console.say(outcome),
            Err(e) => {
                tracing::debug!(%student, %class, error = %e, "Enroll failed");
                console.say(format!("Error enrolling student: {e}"))
            }
        }
    }

    async fn unenroll<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> io::Result<()> {
        console.say("Unenroll from class")?;
        let Some((student, class)) = self.ask_pair(console)? else {
            return Ok(());
        };

        match registration::unenroll(self.store, &student, &class).await {
            Ok(outcome) => console.say(outcome),
            Err(e) => {
                tracing::debug!(%student, %class, error = %e, "Unenroll failed");
                console.say(format!("Error unenrolling student: {e}"))
            }
        }
    }

    async fn list_classes<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> io::Result<()> {
        console.say("List student's classes")?;
        let Some(student) = self.ask_student(console)? else {
            return Ok(());
        };

        match registration::list_classes(self.store, &student).await {
            Ok(titles) if titles.is_empty() => console.say("Classes: (none)"),
            Ok(titles) => console.say(format!("Classes: {}", titles.join(", "))),
            Err(e) => {
                tracing::debug!(%student, error = %e, "Listing classes failed");
                console.say(format!("Error listing student's classes: {e}"))
            }
        }
    }

    fn ask_student<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> io::Result<Option<StudentId>> {
        console.say("Students:")?;
        console.show(self.students)?;
        Ok(console.prompt("Type student's ID: ")?.map(StudentId))
    }

    fn ask_pair<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> io::Result<Option<(StudentId, ClassCode)>> {
        let Some(student) = self.ask_student(console)? else {
            return Ok(None);
        };
        console.say("Classes:")?;
        console.show(self.classes)?;
        Ok(console
            .prompt("Type class ID: ")?
            .map(|code| (student, ClassCode(code))))
    }
}
