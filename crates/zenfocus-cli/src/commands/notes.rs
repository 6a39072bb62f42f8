use clap::Subcommand;
use zenfocus_core::error::Result;
use zenfocus_core::notes;
use zenfocus_core::storage::open_store;
use zenfocus_core::Config;

#[derive(Subcommand)]
pub enum NotesAction {
    /// Print the saved notes
    Show,
    /// Replace the notes
    Set {
        /// New notes text
        text: String,
    },
    /// Erase the notes
    Clear,
}

pub fn run(action: NotesAction, config: &Config) -> Result<()> {
    let store = open_store(config);

    match action {
        NotesAction::Show => println!("{}", notes::load(store.as_ref())),
        NotesAction::Set { text } => {
            notes::save(store.as_ref(), &text)?;
            println!("ok");
        }
        NotesAction::Clear => {
            notes::save(store.as_ref(), "")?;
            println!("ok");
        }
    }
    Ok(())
}
