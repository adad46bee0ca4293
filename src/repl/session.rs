//! Shell session state and command execution.

use std::io::Write;

use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::commands::Command;
use super::input::clean_input;
use crate::api::PokeApiClient;
use crate::models::Pokemon;

/// What the loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

// == Pagination ==
/// Cursor over the location-area listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pagination {
    pub next: Option<String>,
    pub previous: Option<String>,
}

// == Pokedex ==
/// The user's caught pokemon, in catch order.
#[derive(Debug, Clone, Default)]
pub struct Pokedex {
    caught: Vec<Pokemon>,
}

impl Pokedex {
    /// Records a catch. Catching a pokemon again refreshes its record in place.
    pub fn add(&mut self, pokemon: Pokemon) {
        match self.caught.iter_mut().find(|p| p.name == pokemon.name) {
            Some(existing) => *existing = pokemon,
            None => self.caught.push(pokemon),
        }
    }

    pub fn find(&self, name: &str) -> Option<&Pokemon> {
        self.caught.iter().find(|p| p.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.caught.iter().map(|p| p.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.caught.len()
    }

    pub fn is_empty(&self) -> bool {
        self.caught.is_empty()
    }
}

// == Session ==
/// Everything a command needs, passed explicitly instead of living in globals.
#[derive(Debug)]
pub struct Session {
    client: PokeApiClient,
    pagination: Pagination,
    pokedex: Pokedex,
    rng: StdRng,
}

impl Session {
    pub fn new(client: PokeApiClient) -> Self {
        Self::with_rng(client, StdRng::from_entropy())
    }

    /// Creates a session with a fixed RNG, for reproducible catch rolls.
    pub fn with_rng(client: PokeApiClient, rng: StdRng) -> Self {
        Self {
            client,
            pagination: Pagination::default(),
            pokedex: Pokedex::default(),
            rng,
        }
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn pokedex(&self) -> &Pokedex {
        &self.pokedex
    }

    // == Execute ==
    /// Runs one line of input, writing user-facing output to `out`.
    ///
    /// Blank lines are ignored. Fetch and decode failures are returned to the
    /// caller, which reports them and keeps the shell running.
    pub async fn execute<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Flow> {
        let words = clean_input(line);
        let Some((name, args)) = words.split_first() else {
            return Ok(Flow::Continue);
        };
        let arg = args.first().map(String::as_str);

        let Some(command) = Command::parse(name) else {
            writeln!(out, "Unknown command")?;
            return Ok(Flow::Continue);
        };
        debug!("Executing {:?} with argument {:?}", command, arg);

        match command {
            Command::Help => self.help(out)?,
            Command::Exit => {
                writeln!(out, "Closing the Pokedex... Goodbye!")?;
                return Ok(Flow::Exit);
            }
            Command::Map => self.map(false, out).await?,
            Command::MapBack => self.map(true, out).await?,
            Command::Explore => self.explore(arg, out).await?,
            Command::Catch => self.catch(arg, out).await?,
            Command::Inspect => self.inspect(arg, out)?,
            Command::Pokedex => self.list_pokedex(out)?,
        }

        Ok(Flow::Continue)
    }

    fn help<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "Welcome to the Pokedex!")?;
        writeln!(out, "Usage:")?;
        writeln!(out)?;
        for command in Command::ALL {
            writeln!(out, "{}: {}", command.name(), command.description())?;
        }
        Ok(())
    }

    /// Shows a page of location areas and moves the cursor to its neighbours.
    ///
    /// With no cursor in the requested direction the first page is shown.
    async fn map<W: Write>(&mut self, back: bool, out: &mut W) -> Result<()> {
        let cursor = if back {
            self.pagination.previous.as_deref()
        } else {
            self.pagination.next.as_deref()
        };

        let page = self.client.location_areas(cursor).await?;
        self.pagination = Pagination {
            next: page.next,
            previous: page.previous,
        };

        for area in &page.results {
            writeln!(out, "{}", area.name)?;
        }
        Ok(())
    }

    async fn explore<W: Write>(&self, area: Option<&str>, out: &mut W) -> Result<()> {
        let Some(area) = area else {
            writeln!(out, "No area provided. Please provide an area after 'explore'")?;
            writeln!(out, "Example: explore canalave-city-area")?;
            return Ok(());
        };

        writeln!(out, "Exploring {}...", area)?;
        let location = self.client.location_area(area).await?;

        writeln!(out, "Found Pokemon:")?;
        for name in location.pokemon_names() {
            writeln!(out, " - {}", name)?;
        }
        Ok(())
    }

    async fn catch<W: Write>(&mut self, name: Option<&str>, out: &mut W) -> Result<()> {
        let Some(name) = name else {
            writeln!(out, "Missing pokemon name. Try again!")?;
            return Ok(());
        };

        writeln!(out, "Throwing a Pokeball at {}...", name)?;
        let pokemon = self.client.pokemon(name).await?;

        let roll: u32 = self.rng.gen_range(0..100);
        if roll < pokemon.catch_chance() {
            writeln!(out, "{} was caught!", name)?;
            writeln!(out, "You may now inspect it with the inspect command.")?;
            self.pokedex.add(pokemon);
        } else {
            writeln!(out, "{} escaped!", name)?;
        }
        Ok(())
    }

    fn inspect<W: Write>(&self, name: Option<&str>, out: &mut W) -> Result<()> {
        let Some(name) = name else {
            writeln!(out, "Please provide the name of a pokemon in your Pokedex.")?;
            return Ok(());
        };

        let Some(pokemon) = self.pokedex.find(name) else {
            writeln!(out, "you have not caught that pokemon")?;
            return Ok(());
        };

        writeln!(out, "Name: {}", pokemon.name)?;
        writeln!(out, "Height: {}", pokemon.height)?;
        writeln!(out, "Weight: {}", pokemon.weight)?;
        writeln!(out, "Stats:")?;
        for (stat, value) in pokemon.stats.entries() {
            writeln!(out, "  -{}: {}", stat, value)?;
        }
        writeln!(out, "Types:")?;
        for kind in &pokemon.types {
            writeln!(out, "  - {}", kind)?;
        }
        Ok(())
    }

    fn list_pokedex<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "Your Pokedex:")?;
        for name in self.pokedex.names() {
            writeln!(out, " - {}", name)?;
        }
        Ok(())
    }
}
