//! Line commands typed at the storefront prompt.

use std::str::FromStr;

use storefront_core::{ContactForm, LineAction, PageEvent};
use storefront_types::CategorySelection;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Forward to the page model
    Page(PageEvent),
    /// Page scroll; also reports the new card layout
    Scroll { offset_px: u32 },
    ShowMenu,
    ShowCart,
    ShowTestimonial,
    Effects,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  menu                      show menu tabs and entries
  filter <category|all>     select a menu tab
  add <item>                add menu entry <item> to the cart
  inc|dec|rm <line>         adjust or remove cart line <line>
  cart                      show the cart
  open | close | backdrop   open or close the cart panel
  checkout                  send the order to the messaging service
  next | prev | review      testimonial slider
  scroll <px> | top         page scroll, card reveal and back-to-top
  nav | outside             toggle the mobile nav, click outside it
  contact <name>|<email>|<message>
  effects                   show the decorations
  help | quit";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct ParseCommandError(pub String);

fn index_arg(verb: &str, arg: Option<&str>) -> Result<usize, ParseCommandError> {
    let arg = arg.ok_or_else(|| ParseCommandError(format!("{verb} needs a number")))?;
    arg.parse()
        .map_err(|_| ParseCommandError(format!("{verb}: {arg:?} is not a number")))
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, Some(rest.trim())),
            None => (line, None),
        };

        let line_event = |action| -> Result<Command, ParseCommandError> {
            Ok(Command::Page(PageEvent::Line {
                action,
                index: index_arg(verb, rest)?,
            }))
        };

        match verb.to_ascii_lowercase().as_str() {
            "menu" => Ok(Command::ShowMenu),
            "filter" => {
                let tag = rest.ok_or_else(|| ParseCommandError("filter needs a category".into()))?;
                let selection: CategorySelection = tag.parse().unwrap_or_default();
                Ok(Command::Page(PageEvent::SelectCategory(selection)))
            }
            "add" => Ok(Command::Page(PageEvent::AddToCart {
                item: index_arg(verb, rest)?,
            })),
            "inc" | "+" => line_event(LineAction::Increment),
            "dec" | "-" => line_event(LineAction::Decrement),
            "rm" | "remove" => line_event(LineAction::Remove),
            "cart" => Ok(Command::ShowCart),
            "open" => Ok(Command::Page(PageEvent::OpenCart)),
            "close" => Ok(Command::Page(PageEvent::CloseCart)),
            "backdrop" => Ok(Command::Page(PageEvent::CartBackdrop)),
            "checkout" => Ok(Command::Page(PageEvent::Checkout)),
            "next" => Ok(Command::Page(PageEvent::NextTestimonial)),
            "prev" => Ok(Command::Page(PageEvent::PrevTestimonial)),
            "review" => Ok(Command::ShowTestimonial),
            "scroll" => {
                let offset = index_arg(verb, rest)?;
                Ok(Command::Scroll {
                    offset_px: u32::try_from(offset).unwrap_or(u32::MAX),
                })
            }
            "top" => Ok(Command::Page(PageEvent::BackToTop)),
            "nav" => Ok(Command::Page(PageEvent::ToggleNav)),
            "outside" => Ok(Command::Page(PageEvent::OutsideNavClick)),
            "contact" => {
                let mut fields = rest.unwrap_or_default().splitn(3, '|').map(str::trim);
                let form = ContactForm {
                    name: fields.next().unwrap_or_default().to_string(),
                    email: fields.next().unwrap_or_default().to_string(),
                    phone: String::new(),
                    message: fields.next().unwrap_or_default().to_string(),
                };
                Ok(Command::Page(PageEvent::SubmitContact(form)))
            }
            "effects" => Ok(Command::Effects),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(ParseCommandError(format!("unknown command {other:?}, try help"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_types::Category;

    #[test]
    fn test_parse_cart_commands() {
        assert_eq!(
            "add 3".parse::<Command>().unwrap(),
            Command::Page(PageEvent::AddToCart { item: 3 })
        );
        assert_eq!(
            "  dec 0 ".parse::<Command>().unwrap(),
            Command::Page(PageEvent::Line {
                action: LineAction::Decrement,
                index: 0
            })
        );
        assert_eq!(
            "rm 2".parse::<Command>().unwrap(),
            Command::Page(PageEvent::Line {
                action: LineAction::Remove,
                index: 2
            })
        );
        assert!("inc".parse::<Command>().is_err());
        assert!("inc two".parse::<Command>().is_err());
    }

    #[test]
    fn test_parse_filter() {
        assert_eq!(
            "filter all".parse::<Command>().unwrap(),
            Command::Page(PageEvent::SelectCategory(CategorySelection::All))
        );
        assert_eq!(
            "filter drinks".parse::<Command>().unwrap(),
            Command::Page(PageEvent::SelectCategory(CategorySelection::Tag(
                Category::new("drinks")
            )))
        );
    }

    #[test]
    fn test_parse_contact() {
        match "contact Bola | bola@example.com | Do you deliver?"
            .parse::<Command>()
            .unwrap()
        {
            Command::Page(PageEvent::SubmitContact(form)) => {
                assert_eq!(form.name, "Bola");
                assert_eq!(form.email, "bola@example.com");
                assert_eq!(form.message, "Do you deliver?");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_parse_misc() {
        assert_eq!("quit".parse::<Command>().unwrap(), Command::Quit);
        assert_eq!(
            "scroll 1200".parse::<Command>().unwrap(),
            Command::Scroll { offset_px: 1200 }
        );
        assert_eq!("CHECKOUT".parse::<Command>().unwrap(), Command::Page(PageEvent::Checkout));
        assert!("dance".parse::<Command>().is_err());
    }
}
