//! Wire format for rule-service queries and responses.
//!
//! Queries are logic-service terms built around the board collaborator's
//! opaque serialized form:
//!
//! ```text
//! player_move(<board>-(<colours>),[<row>,<col>,<colour>],<player>)
//! updateColours(<board>-(<colours>),<player>)
//! ```
//!
//! Responses come in two recognized shapes: a colour-domination tuple
//! (placement verdict) and the acknowledgement atom `ok` (undo
//! synchronization). Anything else is [`RuleError::Malformed`].

use crate::board::TilePos;
use crate::core::{Colour, DominationState, PlayerId, REGION_COUNT};

use super::RuleError;

/// Encode a placement query.
///
/// `board` and `colours` are the serialized board and domination tuple as
/// they stood *before* the placement; the placement itself rides in the
/// `[row,col,colour]` argument.
#[must_use]
pub fn player_move_query(
    board: &str,
    colours: &str,
    pos: TilePos,
    colour: Colour,
    player: PlayerId,
) -> String {
    format!(
        "player_move({board}-({colours}),[{},{},{}],{})",
        pos.row,
        pos.col,
        colour,
        player.number()
    )
}

/// Encode an undo-synchronization query carrying the restored state.
#[must_use]
pub fn update_colours_query(board: &str, colours: &str, player: PlayerId) -> String {
    format!("updateColours({board}-({colours}),{})", player.number())
}

/// Parse a colour-domination tuple: `REGION_COUNT` single-quoted
/// `TRUE`/`FALSE` tokens joined by `-`, optionally wrapped in one pair of
/// parentheses or brackets.
pub fn parse_domination(payload: &str) -> Result<DominationState, RuleError> {
    let malformed = || RuleError::Malformed {
        payload: payload.to_owned(),
    };

    let mut body = payload.trim();
    if let Some(inner) = strip_wrapper(body, '(', ')') {
        body = inner;
    } else if let Some(inner) = strip_wrapper(body, '[', ']') {
        body = inner;
    }

    let mut flags = [false; REGION_COUNT];
    let mut count = 0;
    for token in body.split('-') {
        if count == REGION_COUNT {
            return Err(malformed());
        }
        let token = token.trim().trim_matches('\'');
        flags[count] = match token {
            "TRUE" => true,
            "FALSE" => false,
            _ => return Err(malformed()),
        };
        count += 1;
    }
    if count != REGION_COUNT {
        return Err(malformed());
    }

    Ok(DominationState::from_flags(flags))
}

/// Parse the acknowledgement shape used by undo synchronization.
pub fn parse_ack(payload: &str) -> Result<(), RuleError> {
    if payload.trim() == "ok" {
        Ok(())
    } else {
        Err(RuleError::Malformed {
            payload: payload.to_owned(),
        })
    }
}

fn strip_wrapper(body: &str, open: char, close: char) -> Option<&str> {
    let body = body.strip_prefix(open)?;
    body.strip_suffix(close)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_move_query() {
        let query = player_move_query(
            "[[empty]]",
            "'FALSE'-'FALSE'-'FALSE'-'FALSE'-'FALSE'-'FALSE'",
            TilePos::new(2, 3),
            Colour::Purple,
            PlayerId::ONE,
        );
        assert_eq!(
            query,
            "player_move([[empty]]-('FALSE'-'FALSE'-'FALSE'-'FALSE'-'FALSE'-'FALSE'),[2,3,purple],1)"
        );
    }

    #[test]
    fn test_update_colours_query() {
        let query = update_colours_query(
            "[[empty]]",
            "'TRUE'-'FALSE'-'FALSE'-'FALSE'-'FALSE'-'FALSE'",
            PlayerId::TWO,
        );
        assert_eq!(
            query,
            "updateColours([[empty]]-('TRUE'-'FALSE'-'FALSE'-'FALSE'-'FALSE'-'FALSE'),2)"
        );
    }

    #[test]
    fn test_parse_domination_plain() {
        let state = parse_domination("'TRUE'-'FALSE'-'FALSE'-'FALSE'-'FALSE'-'TRUE'").unwrap();
        assert_eq!(
            state,
            DominationState::from_flags([true, false, false, false, false, true])
        );
    }

    #[test]
    fn test_parse_domination_wrapped() {
        let wrapped = "('FALSE'-'FALSE'-'FALSE'-'FALSE'-'FALSE'-'FALSE')";
        assert_eq!(parse_domination(wrapped).unwrap(), DominationState::new());

        let bracketed = "['FALSE'-'FALSE'-'FALSE'-'FALSE'-'FALSE'-'FALSE']";
        assert_eq!(parse_domination(bracketed).unwrap(), DominationState::new());
    }

    #[test]
    fn test_parse_domination_round_trips_encoding() {
        let state = DominationState::from_flags([false, true, false, true, false, false]);
        assert_eq!(parse_domination(&state.encode()).unwrap(), state);
    }

    #[test]
    fn test_parse_domination_rejects_bad_payloads() {
        for payload in [
            "",
            "yes",
            "'TRUE'",
            "'TRUE'-'FALSE'",
            "'TRUE'-'FALSE'-'FALSE'-'FALSE'-'FALSE'-'MAYBE'",
            "'TRUE'-'FALSE'-'FALSE'-'FALSE'-'FALSE'-'FALSE'-'FALSE'",
        ] {
            let result = parse_domination(payload);
            assert_eq!(
                result,
                Err(RuleError::Malformed {
                    payload: payload.to_owned()
                }),
                "payload {payload:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_ack() {
        assert!(parse_ack("ok").is_ok());
        assert!(parse_ack("  ok\n").is_ok());
        assert!(parse_ack("done").is_err());
        assert!(parse_ack("").is_err());
    }
}
