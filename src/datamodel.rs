use uuid::{Uuid, uuid};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub id: Uuid,
    pub name: String,
    pub born: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: Uuid,
    pub title: String,
    pub published: i32,
    pub author: String,
    pub genres: Vec<String>,
}

pub struct AuthorSeed {
    pub id: Uuid,
    pub name: &'static str,
    pub born: Option<i32>,
}

pub struct BookSeed {
    pub id: Uuid,
    pub title: &'static str,
    pub published: i32,
    pub author: &'static str,
    pub genres: &'static [&'static str],
}

impl From<&AuthorSeed> for Author {
    fn from(seed: &AuthorSeed) -> Self {
        Self {
            id: seed.id,
            name: seed.name.into(),
            born: seed.born,
        }
    }
}

impl From<&BookSeed> for Book {
    fn from(seed: &BookSeed) -> Self {
        Self {
            id: seed.id,
            title: seed.title.into(),
            published: seed.published,
            author: seed.author.into(),
            genres: seed.genres.iter().map(|genre| (*genre).into()).collect(),
        }
    }
}

pub static SEED_AUTHORS: &[AuthorSeed] = &[
    AuthorSeed {
        id: uuid!("afa51ab0-344d-11e9-a414-719c6709cf3e"),
        name: "Robert Martin",
        born: Some(1952),
    },
    AuthorSeed {
        id: uuid!("afa5b6f0-344d-11e9-a414-719c6709cf3e"),
        name: "Martin Fowler",
        born: Some(1963),
    },
    AuthorSeed {
        id: uuid!("afa5b6f1-344d-11e9-a414-719c6709cf3e"),
        name: "Fyodor Dostoevsky",
        born: Some(1821),
    },
    AuthorSeed {
        id: uuid!("afa5b6f2-344d-11e9-a414-719c6709cf3e"),
        name: "Joshua Kerievsky",
        born: None,
    },
    AuthorSeed {
        id: uuid!("afa5b6f3-344d-11e9-a414-719c6709cf3e"),
        name: "Sandi Metz",
        born: None,
    },
];

pub static SEED_BOOKS: &[BookSeed] = &[
    BookSeed {
        id: uuid!("afa5b6f4-344d-11e9-a414-719c6709cf3e"),
        title: "Clean Code",
        published: 2008,
        author: "Robert Martin",
        genres: &["refactoring"],
    },
    BookSeed {
        id: uuid!("afa5b6f5-344d-11e9-a414-719c6709cf3e"),
        title: "Agile software development",
        published: 2002,
        author: "Robert Martin",
        genres: &["agile", "patterns", "design"],
    },
    BookSeed {
        id: uuid!("afa5de00-344d-11e9-a414-719c6709cf3e"),
        title: "Refactoring, edition 2",
        published: 2018,
        author: "Martin Fowler",
        genres: &["refactoring"],
    },
    BookSeed {
        id: uuid!("afa5de01-344d-11e9-a414-719c6709cf3e"),
        title: "Refactoring to patterns",
        published: 2008,
        author: "Joshua Kerievsky",
        genres: &["refactoring", "patterns"],
    },
    BookSeed {
        id: uuid!("afa5de02-344d-11e9-a414-719c6709cf3e"),
        title: "Practical Object-Oriented Design, An Agile Primer Using Ruby",
        published: 2012,
        author: "Sandi Metz",
        genres: &["refactoring", "design"],
    },
    BookSeed {
        id: uuid!("afa5de03-344d-11e9-a414-719c6709cf3e"),
        title: "Crime and punishment",
        published: 1866,
        author: "Fyodor Dostoevsky",
        genres: &["classic", "crime"],
    },
    BookSeed {
        id: uuid!("afa5de04-344d-11e9-a414-719c6709cf3e"),
        title: "Demons",
        published: 1872,
        author: "Fyodor Dostoevsky",
        genres: &["classic", "revolution"],
    },
];
