use std::env;

use dorm_chef::{GeneratorFactory, RecipeRequest, Strategy};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args = env::args().skip(1).peekable();

    let strategy = match args.peek().map(String::as_str) {
        Some("--strategy") => {
            args.next();
            let name = args
                .next()
                .ok_or("--strategy requires a value (template, openai, groq)")?;
            Some(parse_strategy(&name)?)
        }
        _ => None,
    };

    let ingredients: Vec<String> = args.collect();
    if ingredients.len() < 2 {
        eprintln!("Usage: dorm-chef [--strategy template|openai|groq] <ingredient> <ingredient> [more...]");
        return Err("please provide at least two ingredients".into());
    }

    let mut builder = RecipeRequest::builder().ingredients(ingredients);
    if let Some(strategy) = strategy {
        builder = builder.strategy(strategy);
    }

    let recipe = builder.generate().await?;
    println!("{}", serde_json::to_string_pretty(&recipe)?);

    Ok(())
}

fn parse_strategy(name: &str) -> Result<Strategy, String> {
    match name {
        "template" => Ok(Strategy::Template),
        "openai" => Ok(Strategy::OpenAI),
        "groq" => Ok(Strategy::Groq),
        other => Err(format!(
            "unknown strategy '{}', expected one of: {}",
            other,
            GeneratorFactory::available_strategies().join(", ")
        )),
    }
}
