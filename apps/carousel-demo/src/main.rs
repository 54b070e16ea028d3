mod script;

use anyhow::{Context, Result};
use glide_animation::ManualClock;
use glide_carousel::{Carousel, CarouselConfig, ItemSet, LayoutMetrics};
use glide_platform_web::WebPlatform;
use script::{Command, Device};

const DEFAULT_SCRIPT: &str = "\
# container 364px wide, two 32px preview slots -> 300px items area
touch down 150 100
touch move 120 102
touch move 60 104
touch up 60 104
wait 300
mouse down 150 100
mouse move 170 100
mouse up 170 100
wait 300
touch down 150 100
touch move 152 160
touch up 152 220
goto 4
wait 100
next
wait 300
prev
";

fn main() -> Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let source = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("reading script {path}"))?,
        None => DEFAULT_SCRIPT.to_string(),
    };
    let commands = script::parse(&source)?;

    let items: ItemSet<String> = (1..=5).map(|n| format!("Slide {n}")).collect();
    let config = CarouselConfig::default().with_dots(true);
    let clock = ManualClock::new();
    let mut carousel = Carousel::with_clock(items.len(), config, clock.clone())?;
    carousel.set_layout(LayoutMetrics::measure(364.0, 0.0, carousel.config())?)?;
    let platform = WebPlatform::default();

    println!("=== Glide carousel replay ===");
    println!("{} commands, {} items", commands.len(), items.len());
    println!();

    for command in &commands {
        match *command {
            Command::Pointer {
                device,
                kind,
                x,
                y,
            } => {
                let raw = match device {
                    Device::Mouse => platform.mouse_event(kind, x, y, true),
                    Device::Touch => {
                        let point = [(0, x, y)];
                        platform.touch_event(kind, &point, &point, true)
                    }
                };
                let outcome = platform.dispatch(&mut carousel, &raw);
                log::info!(
                    "{device:?} {kind:?} ({x}, {y}) -> prevent_default={} redraw={}",
                    outcome.prevent_default,
                    outcome.needs_redraw
                );
            }
            Command::Wait(millis) => {
                clock.advance_millis(millis);
                if carousel.tick() {
                    log::info!("snap animation finished");
                }
            }
            Command::Next => {
                carousel.increment();
            }
            Command::Prev => {
                carousel.decrement();
            }
            Command::Goto(index) => {
                carousel.set_index(index);
            }
        }
        print_state(&carousel, &items);
    }

    Ok(())
}

fn print_state(carousel: &Carousel<ManualClock>, items: &ItemSet<String>) {
    let Some(frame) = carousel.frame() else {
        println!("(unmeasured)");
        return;
    };
    let dots: String = carousel
        .dot_indicators()
        .iter()
        .map(|dot| if dot.active { '●' } else { '○' })
        .collect();
    let active = items
        .render_with(carousel.active_index(), |label| label.clone())
        .into_iter()
        .find(|slot| slot.is_active)
        .map(|slot| slot.content)
        .unwrap_or_default();
    let transition = frame
        .transition
        .map(|spec| spec.css_transition("transform"))
        .unwrap_or_else(|| "none".to_string());
    println!(
        "{dots}  {active:<8} translate={:>8.1}px  drag={:>6.1}px  transition={transition}",
        frame.translation,
        carousel.drag_offset(),
    );
}
