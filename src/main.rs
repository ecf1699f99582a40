use pokedex_core::display::{
    MAX_STAT, format_pokemon_id, format_pokemon_name, height_to_meters, stat_percentage,
    type_label, weight_to_kilograms,
};
use pokedex_core::{Config, Detail, PokeApiService, PokedexError, PokemonList, Summary};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

enum Command {
    List { offset: u32 },
    More { pages: u32 },
    Detail { id_or_name: String },
    Search { query: String },
}

fn parse_command(args: &[String]) -> Result<Command, PokedexError> {
    let usage = || {
        PokedexError::ConfigError(
            "usage: pokedex [list [offset] | more <pages> | detail <id|name> | search <query>]"
                .to_string(),
        )
    };
    let number = |value: Option<&String>, default: u32| match value {
        Some(v) => v.parse::<u32>().map_err(|_| usage()),
        None => Ok(default),
    };

    match args.first().map(String::as_str) {
        None | Some("list") => Ok(Command::List {
            offset: number(args.get(1), 0)?,
        }),
        Some("more") => Ok(Command::More {
            pages: number(args.get(1), 1)?,
        }),
        Some("detail") => args
            .get(1)
            .map(|id_or_name| Command::Detail {
                id_or_name: id_or_name.to_lowercase(),
            })
            .ok_or_else(usage),
        Some("search") if args.len() > 1 => Ok(Command::Search {
            query: args[1..].join(" "),
        }),
        Some(_) => Err(usage()),
    }
}

// List entries carry raw type ids; show the labels where one is known.
fn type_labels(types: &[String]) -> String {
    types
        .iter()
        .map(|t| type_label(t).unwrap_or(t.as_str()))
        .collect::<Vec<_>>()
        .join("/")
}

fn print_summaries(pokemon: &[Summary]) {
    for p in pokemon {
        println!(
            "#{} {:<16} {:<18} {}",
            format_pokemon_id(p.id),
            format_pokemon_name(&p.name),
            type_labels(&p.types),
            p.primary_color()
        );
    }
}

fn print_detail(detail: &Detail) {
    println!("#{} {}", format_pokemon_id(detail.id), detail.name);
    println!("Types:     {}", detail.types.join(", "));
    println!("Height:    {} m", height_to_meters(detail.height));
    println!("Weight:    {} kg", weight_to_kilograms(detail.weight));
    println!("Abilities: {}", detail.abilities.join(", "));
    println!();
    println!("{}", detail.species);
    println!();

    let stats = &detail.stats;
    for (label, value) in [
        ("HP", stats.hp),
        ("Attack", stats.attack),
        ("Defense", stats.defense),
        ("Sp. Atk", stats.special_attack),
        ("Sp. Def", stats.special_defense),
        ("Speed", stats.speed),
    ] {
        let bar = "#".repeat((stat_percentage(value, MAX_STAT) / 5.0).round() as usize);
        println!("{:<8} {:>3} {}", label, value, bar);
    }
    println!("{:<8} {:>3}", "Total", stats.total());
}

async fn run(service: PokeApiService, command: Command) -> Result<(), PokedexError> {
    let page_size = service.config().list.page_size;

    match command {
        Command::List { offset } => {
            let pokemon = service.get_pokemon_list(page_size, offset).await?;
            print_summaries(&pokemon);
        }
        Command::More { pages } => {
            let list = PokemonList::new(service, page_size);
            list.load_initial().await;
            if let Some(message) = list.error() {
                return Err(PokedexError::NetworkError(message));
            }
            for _ in 0..pages {
                list.load_more().await;
            }
            print_summaries(&list.items());
            tracing::info!("{} Pokémon loaded, next offset {}", list.items().len(), list.offset());
        }
        Command::Detail { id_or_name } => {
            let detail = service.get_pokemon_detail(&id_or_name).await?;
            print_detail(&detail);
        }
        Command::Search { query } => {
            let found = service.search_pokemon(&query).await?;
            if found.is_empty() {
                println!("No Pokémon match '{}'", query);
            }
            print_summaries(&found);
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("{}=info,pokedex_core=info", env!("CARGO_CRATE_NAME")).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match Config::load_default() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match parse_command(&args) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };

    tracing::debug!("Using PokeAPI at {}", config.pokemon.api_url);
    if let Err(e) = run(PokeApiService::new(config), command).await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}
