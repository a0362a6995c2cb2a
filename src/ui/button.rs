// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Presentational button.

use crate::browser::Navigator;
use crate::ui::escape_html;

const DEFAULT_COLOR: &str = "text-white";
const DEFAULT_BACKGROUND: &str = "bg-mint-green";

/// Appearance and behavior of a button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonProps {
    pub width: u32,
    pub height: u32,
    pub font_size: u32,
    pub is_link: bool,
    pub href: String,
    /// Text color class
    pub color: String,
    /// Background color class
    pub background_color: String,
    pub box_shadow: bool,
    pub medium_font: bool,
}

/// How the button is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind<'a> {
    /// Wrapped in a link to the given href.
    Link(&'a str),
    Plain,
}

impl ButtonProps {
    pub fn new(width: u32, height: u32, font_size: u32) -> Self {
        Self {
            width,
            height,
            font_size,
            is_link: false,
            href: String::new(),
            color: DEFAULT_COLOR.to_string(),
            background_color: DEFAULT_BACKGROUND.to_string(),
            box_shadow: false,
            medium_font: false,
        }
    }

    pub fn link(mut self, href: impl Into<String>) -> Self {
        self.is_link = true;
        self.href = href.into();
        self
    }

    pub fn color(mut self, class: impl Into<String>) -> Self {
        self.color = class.into();
        self
    }

    pub fn background_color(mut self, class: impl Into<String>) -> Self {
        self.background_color = class.into();
        self
    }

    pub fn box_shadow(mut self, on: bool) -> Self {
        self.box_shadow = on;
        self
    }

    pub fn medium_font(mut self, on: bool) -> Self {
        self.medium_font = on;
        self
    }

    /// A link button needs both the flag and a target.
    pub fn kind(&self) -> ButtonKind<'_> {
        if self.is_link && !self.href.is_empty() {
            ButtonKind::Link(&self.href)
        } else {
            ButtonKind::Plain
        }
    }

    pub fn class_name(&self) -> String {
        let shadow = if self.box_shadow { "shadow-button" } else { "" };
        let font = if self.medium_font {
            "font-sindinaru-m"
        } else {
            "font-sindinaru-b"
        };

        [
            "font-admin",
            self.color.as_str(),
            self.background_color.as_str(),
            shadow,
            font,
        ]
        .into_iter()
        .filter(|class| !class.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
    }

    pub fn style(&self) -> String {
        format!(
            "width: {}px; height: {}px; font-size: {}px; border-radius: 15px; \
             display: flex; align-items: center; justify-content: center; cursor: pointer",
            self.width, self.height, self.font_size
        )
    }

    /// HTML markup with `label` as the button text.
    pub fn render(&self, label: &str) -> String {
        let button = format!(
            r#"<button type="button" style="{}" class="{}">{}</button>"#,
            escape_html(&self.style()),
            escape_html(&self.class_name()),
            escape_html(label)
        );

        match self.kind() {
            ButtonKind::Link(href) => {
                format!(r#"<a href="{}">{}</a>"#, escape_html(href), button)
            }
            ButtonKind::Plain => button,
        }
    }
}

/// A button bound to an optional click handler.
pub struct Button<'a> {
    props: ButtonProps,
    on_click: Option<Box<dyn FnMut() + 'a>>,
}

impl<'a> Button<'a> {
    pub fn new(props: ButtonProps) -> Self {
        Self {
            props,
            on_click: None,
        }
    }

    pub fn on_click(mut self, handler: impl FnMut() + 'a) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    pub fn props(&self) -> &ButtonProps {
        &self.props
    }

    /// Run the click handler, then follow the link if there is one.
    pub fn press<N: Navigator + ?Sized>(&mut self, navigator: &mut N) {
        if let Some(handler) = self.on_click.as_mut() {
            handler();
        }
        if let ButtonKind::Link(href) = self.props.kind() {
            navigator.push(href);
        }
    }
}
