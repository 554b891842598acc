use clap::{crate_version, Arg, Command};
use containers::{Just, Maybe, Nothing, Outcome};
use std::error::Error;
use std::process;

#[derive(Debug, PartialEq, Eq)]
struct Found {
  c: char,
  index: usize,
}

fn find_char(text: &str, wanted: char) -> Maybe<Found> {
  for (index, c) in text.char_indices() {
    if c == wanted {
      return Just(Found { c, index });
    }
  }
  Nothing
}

fn single_char(arg: &str) -> Outcome<char, String> {
  let mut chars = arg.chars();
  match (chars.next(), chars.next()) {
    (Some(c), None) => Outcome::success(c),
    _ => Outcome::failure(format!(
      "expected exactly one character, got {:?}",
      arg
    )),
  }
}

fn main() -> Result<(), Box<dyn Error>> {
  let matches = Command::new("find")
    .version(crate_version!())
    .about("Find the first occurrence of a character in a string")
    .arg(
      Arg::new("char")
        .short('c')
        .long("char")
        .value_name("CHAR")
        .help("the character to look for")
        .takes_value(true)
        .required(true),
    )
    .arg(Arg::new("TEXT").help("the string to search").required(true))
    .get_matches();

  let mut parsed = single_char(matches.value_of("char").unwrap());
  if parsed.is_failure() {
    eprintln!("error: {}", parsed.take_failure()?);
    process::exit(2);
  }
  let wanted = parsed.take_success()?;

  let mut found = find_char(matches.value_of("TEXT").unwrap(), wanted);
  if found.is_just() {
    let hit = found.take()?;
    println!("found {:?} at index {}", hit.c, hit.index);
  } else {
    println!("nothing found");
  }

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use containers::AccessErrorKind;
  use pretty_assertions::assert_eq;

  #[test]
  fn finds_the_first_match() {
    let mut result = find_char("abcde", 'c');
    assert!(result.is_just());
    assert_eq!(result.take().unwrap(), Found { c: 'c', index: 2 });
  }

  #[test]
  fn reports_nothing_when_no_char_matches() {
    assert!(find_char("abcde", 'z').is_nothing());
  }

  #[test]
  fn single_char_accepts_one_character() {
    let mut parsed = single_char("x");
    assert!(parsed.is_success());
    assert_eq!(parsed.take_success().unwrap(), 'x');
  }

  #[test]
  fn single_char_rejects_longer_input() {
    let mut parsed = single_char("xy");
    assert!(parsed.is_failure());
    assert_eq!(
      parsed.take_failure().unwrap(),
      "expected exactly one character, got \"xy\""
    );
    assert_eq!(
      parsed.take_failure().unwrap_err().kind,
      AccessErrorKind::Consumed
    );
  }

  #[test]
  fn single_char_rejects_empty_input() {
    assert!(single_char("").is_failure());
  }
}
