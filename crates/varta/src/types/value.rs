use super::Gender;

/// A named person with a grammatical gender.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    pub gender: Gender,
}

impl Person {
    /// Create a person from a name and gender.
    pub fn new(name: impl Into<String>, gender: Gender) -> Self {
        Self { name: name.into(), gender }
    }
}

/// A runtime value passed as a token argument during resolution.
///
/// # Example
///
/// ```
/// use varta::{Gender, Person, Value};
///
/// let count: Value = 42.into();
/// let member: Value = "LIKE".into();
/// let who: Value = Person::new("Alice", Gender::Female).into();
///
/// assert_eq!(count.as_number(), Some(42));
/// assert_eq!(member.as_string(), Some("LIKE"));
/// assert!(who.as_person().is_some());
/// ```
#[derive(Debug, Clone)]
pub enum Value {
    /// An integer (plural counts, numerals).
    Number(i64),

    /// A floating-point number.
    Float(f64),

    /// A string value (plain substitutions, enum members).
    String(String),

    /// A single person (name and pronoun axes).
    Person(Person),

    /// Several people (pronoun axes covering a group).
    People(Vec<Person>),
}

impl Value {
    /// Get this value as an integer, if it is one.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get this value as a float, widening integers.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Number(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Get this value as a string, if it is one.
    pub fn as_string(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get this value as a single person, if it is one.
    pub fn as_person(&self) -> Option<&Person> {
        match self {
            Value::Person(p) => Some(p),
            _ => None,
        }
    }

    /// The genders of the people carried by this value.
    pub fn genders(&self) -> Vec<Gender> {
        match self {
            Value::Person(p) => vec![p.gender],
            Value::People(people) => people.iter().map(|p| p.gender).collect(),
            _ => Vec::new(),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::String(s) => write!(f, "{s}"),
            Value::Person(p) => write!(f, "{}", p.name),
            Value::People(people) => {
                let names: Vec<&str> = people.iter().map(|p| p.name.as_str()).collect();
                write!(f, "{}", names.join(", "))
            }
        }
    }
}

// From implementations for common types

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n as i64)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(n as i64)
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Number(n as i64)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<Person> for Value {
    fn from(p: Person) -> Self {
        Value::Person(p)
    }
}

impl From<Vec<Person>> for Value {
    fn from(people: Vec<Person>) -> Self {
        Value::People(people)
    }
}
