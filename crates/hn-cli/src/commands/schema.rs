/// Handle `hn schema`.
#[allow(clippy::unnecessary_wraps)]
pub fn handle() -> anyhow::Result<()> {
    println!("{}", hn_graphql::schema::sdl());
    Ok(())
}
