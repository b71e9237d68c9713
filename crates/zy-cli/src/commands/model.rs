use zy_oracle::ModelVariant;
use zy_session::Preferences;

pub fn run(variant: Option<&str>) -> Result<(), String> {
    let mut prefs = Preferences::load().map_err(|e| e.to_string())?;

    match variant {
        None => {
            println!("model: {}", prefs.model);
        }
        Some(name) => {
            let model = ModelVariant::parse(name)
                .ok_or_else(|| format!("unknown model variant '{name}', use: flash, pro"))?;
            prefs.model = model;
            prefs.save().map_err(|e| e.to_string())?;
            println!("model set to {model}");
        }
    }

    Ok(())
}
