use mealkit::config::Config;

pub fn token(config: Config, user_id: i64, ttl_secs: u64) -> anyhow::Result<()> {
    let token = mealkit::auth::generate_token(&config.jwt.secret, user_id, ttl_secs)?;

    tracing::info!(user_id, ttl_secs, "token generated");
    println!("{token}");

    Ok(())
}
