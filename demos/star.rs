//! Animate a star against recording surfaces and print what the
//! host would have been told.
//!
//! Run with: RUST_LOG=turtle_anim=debug cargo run --example star --features tracing

use tracing_subscriber::EnvFilter;
use turtle_anim::{
    AnimConfig, Animator, ManualScheduler, Phase, RecordingHost, RecordingSurface,
};

const STAR: &str = r##"
# 36 long strokes, each turned back 170 degrees
pencolour "#1f77b4"
penwidth 2
repeat 36 [
    forward 300 @ray
    right 170 @turn
]
penup
back 40
print "done"
"##;

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with_writer(std::io::stderr)
        .init();

    let mut animator = Animator::new(
        RecordingSurface::default(),
        RecordingSurface::default(),
        RecordingHost::new(),
        ManualScheduler::new(),
        AnimConfig::default(),
    );

    animator.execute_script(STAR)?;
    println!(
        "canvas {} with {} commands to replay",
        animator.surfaces().size(),
        animator.session().log().len()
    );

    let phase = animator.run_until_idle();
    assert_eq!(phase, Phase::Finished);

    println!(
        "{} steps in {:?} of virtual time, {} strokes",
        animator.steps(),
        animator.scheduler().now(),
        animator.surfaces().scratch().strokes().count()
    );
    for line in animator.host().transcript().lines().take(12) {
        println!("  {}", line);
    }
    Ok(())
}
