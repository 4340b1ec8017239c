//! Hero headline with a staggered rise-and-fade entrance.

use leptos::prelude::*;
use leptos_meta::Style;

/// Delay before the first line starts moving.
pub const ENTRANCE_START_MS: u32 = 300;
/// Extra delay per following line.
pub const ENTRANCE_STAGGER_MS: u32 = 200;
/// Length of one line's entrance.
pub const ENTRANCE_DURATION_MS: u32 = 800;
/// Starting downward offset in px.
pub const ENTRANCE_RISE_PX: u32 = 30;

/// Headline, one entry per animated line.
pub const HEADLINE: [&str; 2] = ["Ingin Jadi Programmer Handal?", "(Tapi Males Ngoding?)"];
/// Call to action below the headline.
pub const CALL_TO_ACTION: &str = "Cari Tahu Lebih Lanjut";

const KEYFRAMES_NAME: &str = "hero-line-in";

fn keyframes() -> String {
	format!(
		"@keyframes {KEYFRAMES_NAME} {{ \
		from {{ opacity: 0; transform: translateY({ENTRANCE_RISE_PX}px); }} \
		to {{ opacity: 1; transform: translateY(0); }} }}"
	)
}

/// Inline style for the `index`th line. Lines start hidden and stay at their
/// final state once the animation ends.
pub fn line_entrance_style(index: u32) -> String {
	let delay = ENTRANCE_START_MS + index * ENTRANCE_STAGGER_MS;
	format!(
		"display: inline-block; animation: {KEYFRAMES_NAME} {ENTRANCE_DURATION_MS}ms \
		cubic-bezier(0.19, 1, 0.22, 1) {delay}ms both;"
	)
}

/// Two-line headline plus the call to action, revealed one line at a time.
#[component]
pub fn HeroHeadline() -> impl IntoView {
	view! {
		<Style id="hero-line-keyframes">{keyframes()}</Style>
		<h1>
			<span class="hero-text-line" style=line_entrance_style(0)>
				{HEADLINE[0]}
			</span>
			<br />
			<span class="hero-text-line" style=line_entrance_style(1)>
				{HEADLINE[1]}
			</span>
		</h1>
		<a href="#about" class="hero-text-line" style=line_entrance_style(2)>
			{CALL_TO_ACTION}
		</a>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_lines_are_staggered() {
		assert!(line_entrance_style(0).contains(" 300ms both"));
		assert!(line_entrance_style(1).contains(" 500ms both"));
		assert!(line_entrance_style(2).contains(" 700ms both"));
	}

	#[test]
	fn test_every_line_uses_the_rise_keyframes() {
		let style = line_entrance_style(1);
		assert!(style.starts_with("display: inline-block;"));
		assert!(style.contains("animation: hero-line-in 800ms"));

		let frames = keyframes();
		assert!(frames.starts_with("@keyframes hero-line-in {"));
		assert!(frames.contains("translateY(30px)"));
		assert!(frames.contains("opacity: 0;"));
		assert!(frames.contains("opacity: 1;"));
	}

	#[test]
	fn test_headline_copy() {
		assert_eq!(HEADLINE, ["Ingin Jadi Programmer Handal?", "(Tapi Males Ngoding?)"]);
		assert_eq!(CALL_TO_ACTION, "Cari Tahu Lebih Lanjut");
	}
}
