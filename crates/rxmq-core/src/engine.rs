//! Script-facing entry points.
//!
//! Each call validates its arguments, reads the input stem, decodes, writes
//! the output stem and finally reports the status variables. Decoding
//! happens in full before anything is written, so a failing call only
//! touches the status variables.

use rxmq_symbols::{SymbolError, SymbolTable, default_symbols};
use serde::Serialize;
use tracing::{debug, info_span};

use crate::codec::StemReader;
use crate::context::ConnectionContext;
use crate::error::{ArgumentError, Error, EventError, HeaderError, InputError, TriggerError};
use crate::event::decode_attribute_stream;
use crate::header::extract_trailing_header;
use crate::inventory::Inventory;
use crate::options::EngineOptions;
use crate::publish::publish_symbols;
use crate::status::{Operation, Status, report};
use crate::store::{VariableStore, field_path, is_stem};
use crate::trigger::{TriggerInput, decode_trigger};

/// Input and output stem names of a decoding call.
const DECODE_ARGUMENTS: usize = 2;

/// What a call left behind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub status: Status,
    /// The `"rc cc ac OP text"` return string, also stored as `LASTMSG`.
    pub return_string: String,
    /// Inventory written to the output stem, when the call produced one.
    #[serde(skip)]
    pub inventory: Option<Inventory>,
}

impl Outcome {
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.status.rc >= 0
    }
}

/// Entry points sharing one configuration and symbol table.
#[derive(Debug, Clone)]
pub struct Engine<'s> {
    options: EngineOptions,
    symbols: &'s SymbolTable,
}

impl Engine<'static> {
    /// Engine over the embedded symbol table.
    pub fn new(options: EngineOptions) -> Result<Self, SymbolError> {
        Ok(Self {
            options,
            symbols: default_symbols()?,
        })
    }
}

impl<'s> Engine<'s> {
    #[must_use]
    pub fn with_symbols(options: EngineOptions, symbols: &'s SymbolTable) -> Self {
        Self { options, symbols }
    }

    #[must_use]
    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    #[must_use]
    pub fn symbols(&self) -> &'s SymbolTable {
        self.symbols
    }

    /// Split a dead-letter or transmission header off a message
    /// (`RXMQHXT in. out.`).
    pub fn hxt<S: VariableStore + ?Sized>(&self, store: &mut S, args: &[Option<&[u8]>]) -> Outcome {
        let span = info_span!("hxt");
        let _guard = span.enter();
        let result = stems(args).and_then(|(input, output)| {
            let buffer = read_input(&*store, &input).map_err(HeaderError::from)?;
            let header = extract_trailing_header(&buffer, self.options.byte_order)?;
            Ok(Some(header.fields.write(&mut *store, &output)))
        });
        self.finish(store, Operation::Header, result)
    }

    /// Decode a PCF event message (`RXMQEVNT in. out.`).
    pub fn event<S: VariableStore + ?Sized>(
        &self,
        store: &mut S,
        args: &[Option<&[u8]>],
    ) -> Outcome {
        let span = info_span!("event");
        let _guard = span.enter();
        let result = stems(args).and_then(|(input, output)| {
            let buffer = read_input(&*store, &input).map_err(EventError::from)?;
            let decoded = decode_attribute_stream(
                &buffer,
                &self.options.decode_options(),
                self.symbols,
            )?;
            debug!(
                kind = decoded.kind.as_str(),
                name = %decoded.name,
                elements = decoded.elements,
                consumed = decoded.consumed,
                "event decoded"
            );
            Ok(Some(decoded.fields.write(&mut *store, &output)))
        });
        self.finish(store, Operation::Event, result)
    }

    /// Decode a trigger message (`RXMQTM in out.`).
    ///
    /// An input name ending in `.` is a stem holding `MQTM`; anything else
    /// is taken as the `MQTMC2` argument string itself.
    pub fn tm<S: VariableStore + ?Sized>(
        &self,
        store: &mut S,
        ctx: Option<&ConnectionContext>,
        args: &[Option<&[u8]>],
    ) -> Outcome {
        let span = info_span!("tm");
        let _guard = span.enter();
        let result = check_arguments(args, DECODE_ARGUMENTS).and_then(|values| {
            let (input, output) = (values[0], stem_name(values[1]));
            let order = self.options.byte_order;
            let decoded = match std::str::from_utf8(input) {
                Ok(name) if is_stem(name) => {
                    let buffer =
                        read_input(&*store, name).map_err(TriggerError::from)?;
                    decode_trigger(TriggerInput::Stem(&buffer), ctx, order)?
                }
                _ => decode_trigger(TriggerInput::Raw(input), ctx, order)?,
            };
            Ok(Some(decoded.fields.write(&mut *store, &output)))
        });
        self.finish(store, Operation::Trigger, result)
    }

    /// Publish every named MQ constant (`RXMQCONS`).
    pub fn publish_constants<S: VariableStore + ?Sized>(&self, store: &mut S) -> Outcome {
        let span = info_span!("constants");
        let _guard = span.enter();
        publish_symbols(self.symbols, store, &self.options.status_prefixes);
        self.finish(store, Operation::Constants, Ok(None))
    }

    fn finish<S: VariableStore + ?Sized>(
        &self,
        store: &mut S,
        op: Operation,
        result: Result<Option<Inventory>, Error>,
    ) -> Outcome {
        let (status, message, inventory) = match result {
            Ok(inventory) => (Status::ok(op), String::new(), inventory),
            Err(err) => {
                debug!(op = op.as_str(), rc = err.code(), error = %err, "call failed");
                (Status::failed(op, err.code()), err.to_string(), None)
            }
        };
        let return_string = report(store, &self.options.status_prefixes, &status, &message);
        debug!(return_string = %return_string, "status reported");
        Outcome {
            status,
            return_string,
            inventory,
        }
    }
}

/// Validate argument count and presence, in the order scripts rely on.
fn check_arguments<'a>(
    args: &[Option<&'a [u8]>],
    expected: usize,
) -> Result<Vec<&'a [u8]>, Error> {
    if args.len() != expected {
        return Err(ArgumentError::Count {
            expected,
            found: args.len(),
        }
        .into());
    }
    let mut values = Vec::with_capacity(expected);
    for (index, arg) in args.iter().enumerate() {
        let (null, empty) = if index == 0 {
            (ArgumentError::NullInput, ArgumentError::EmptyInput)
        } else {
            (ArgumentError::NullOutput, ArgumentError::EmptyOutput)
        };
        match arg {
            None => return Err(null.into()),
            Some(value) if value.is_empty() => return Err(empty.into()),
            Some(value) => values.push(*value),
        }
    }
    Ok(values)
}

fn stem_name(value: &[u8]) -> String {
    String::from_utf8_lossy(value).into_owned()
}

/// Input and output stem names of a two-argument call.
fn stems(args: &[Option<&[u8]>]) -> Result<(String, String), Error> {
    let values = check_arguments(args, DECODE_ARGUMENTS)?;
    Ok((stem_name(values[0]), stem_name(values[1])))
}

/// Read `<stem>1`, sized and checked by `<stem>0`.
fn read_input<S: VariableStore + ?Sized>(store: &S, stem: &str) -> Result<Vec<u8>, InputError> {
    let reader = StemReader::new(store, stem);
    let declared = match reader.get_int("0").map(usize::try_from) {
        Some(Ok(declared)) if declared > 0 => declared,
        _ => return Err(InputError::NoData),
    };
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(declared)
        .map_err(|source| InputError::Allocation {
            size: declared,
            source,
        })?;
    let Some(data) = store.get(&field_path(stem, "1")) else {
        return Err(InputError::Missing);
    };
    if data.len() != declared {
        return Err(InputError::LengthMismatch {
            declared,
            actual: data.len(),
        });
    }
    buffer.extend_from_slice(&data);
    debug!(stem, length = declared, "input read");
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn args<'a>(values: &[&'a str]) -> Vec<Option<&'a [u8]>> {
        values.iter().map(|value| Some(value.as_bytes())).collect()
    }

    #[test]
    fn test_argument_checks_in_order() {
        assert_eq!(
            check_arguments(&args(&["IN."]), 2).unwrap_err().code(),
            -1
        );
        assert_eq!(
            check_arguments(&[None, None], 2).unwrap_err().code(),
            -2
        );
        assert_eq!(
            check_arguments(&[Some(b"".as_slice()), None], 2)
                .unwrap_err()
                .code(),
            -3
        );
        assert_eq!(
            check_arguments(&[Some(b"IN.".as_slice()), None], 2)
                .unwrap_err()
                .code(),
            -4
        );
        assert_eq!(
            check_arguments(&args(&["IN.", ""]), 2).unwrap_err().code(),
            -5
        );
    }

    #[test]
    fn test_read_input_cross_checks_length() {
        let mut store = MemoryStore::new();
        assert_eq!(read_input(&store, "IN."), Err(InputError::NoData));

        store.set_str("IN.0", "5");
        assert_eq!(read_input(&store, "IN."), Err(InputError::Missing));

        store.set_str("IN.1", "abc");
        assert_eq!(
            read_input(&store, "IN."),
            Err(InputError::LengthMismatch {
                declared: 5,
                actual: 3
            })
        );

        store.set_str("IN.1", "abcdefg");
        assert_eq!(
            read_input(&store, "IN."),
            Err(InputError::LengthMismatch {
                declared: 5,
                actual: 7
            })
        );

        store.set_str("IN.1", "abcde");
        assert_eq!(read_input(&store, "IN.").unwrap(), b"abcde");
    }
}
