use lamb::core::Expression;
use lamb::env::{TypeEnv, ValueEnv};
use lamb::interpreter::interpret;
use lamb::types::{Type, infer};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // \a: Int. \b: Int -> Int. b
    let sample = Expression::abs(
        "a",
        Type::Int,
        Expression::abs("b", Type::arrow(Type::Int, Type::Int), Expression::var("b")),
    );

    let ty = infer(&TypeEnv::empty(), &sample)?;
    tracing::info!(expression = %sample, "type checked");
    println!("{} : {}", sample, ty);

    let applied = Expression::app(
        Expression::abs("a", Type::Int, Expression::var("a")),
        Expression::int(10),
    );
    let ty = infer(&TypeEnv::empty(), &applied)?;
    let value = interpret(&ValueEnv::empty(), &applied)?;
    println!("{} : {} = {}", applied, ty, value);

    Ok(())
}
