use async_graphql::{
    ComplexObject, Context, EmptySubscription, ErrorExtensions, ID, InputValueError,
    InputValueResult, Object, Scalar, ScalarType, Schema, SimpleObject, Value,
};

use crate::datamodel;
use crate::store::{BookFilter, NewBook, SharedStore, StoreError, YearInput};

use super::loaders::Loaders;

pub type LibrarySchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(store: SharedStore) -> LibrarySchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}

#[derive(SimpleObject)]
pub struct Book {
    title: String,
    published: i32,
    author: String,
    id: ID,
    genres: Vec<String>,
}

impl From<&datamodel::Book> for Book {
    fn from(book: &datamodel::Book) -> Self {
        Self {
            title: book.title.clone(),
            published: book.published,
            author: book.author.clone(),
            id: ID(book.id.to_string()),
            genres: book.genres.clone(),
        }
    }
}

#[derive(SimpleObject)]
#[graphql(complex)]
pub struct Author {
    name: String,
    id: ID,
    born: Option<i32>,
}

impl From<&datamodel::Author> for Author {
    fn from(author: &datamodel::Author) -> Self {
        Self {
            name: author.name.clone(),
            id: ID(author.id.to_string()),
            born: author.born,
        }
    }
}

#[ComplexObject]
impl Author {
    async fn book_count(&self, ctx: &Context<'_>) -> usize {
        ctx.load_book_count(self.name.clone()).await
    }
}

/// A year given either as an integer or as a numeric string.
pub struct Year(pub YearInput);

#[Scalar]
impl ScalarType for Year {
    fn parse(value: Value) -> InputValueResult<Self> {
        match value {
            Value::Number(number) => Ok(Year(match number.as_i64() {
                Some(year) => YearInput::Int(year),
                None => YearInput::Text(number.to_string()),
            })),
            Value::String(text) => Ok(Year(YearInput::Text(text))),
            _ => Err(InputValueError::expected_type(value)),
        }
    }

    fn to_value(&self) -> Value {
        match &self.0 {
            YearInput::Int(year) => Value::from(*year),
            YearInput::Text(text) => Value::String(text.clone()),
        }
    }
}

impl ErrorExtensions for StoreError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| {
            e.set("code", self.code());
            match self {
                StoreError::InvalidInput { value: Some(value) } => {
                    e.set("invalidArgs", Year(value.clone()).to_value())
                }
                StoreError::InvalidInput { value: None } => e.set("invalidArgs", Value::Null),
            }
        })
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn book_count(&self, ctx: &Context<'_>) -> usize {
        ctx.data_unchecked::<SharedStore>().read().await.count_books()
    }

    async fn author_count(&self, ctx: &Context<'_>) -> usize {
        ctx.data_unchecked::<SharedStore>().read().await.count_authors()
    }

    async fn all_books(
        &self,
        ctx: &Context<'_>,
        author: Option<String>,
        genre: Option<String>,
    ) -> Vec<Book> {
        let filter = BookFilter { author, genre };
        let store = ctx.data_unchecked::<SharedStore>().read().await;
        store.list_books(&filter).map(Book::from).collect()
    }

    async fn all_authors(&self, ctx: &Context<'_>) -> Vec<Author> {
        let store = ctx.data_unchecked::<SharedStore>().read().await;
        store.list_authors().iter().map(Author::from).collect()
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn add_book(
        &self,
        ctx: &Context<'_>,
        title: String,
        published: i32,
        author: String,
        genres: Option<Vec<String>>,
    ) -> Book {
        let book = ctx.data_unchecked::<SharedStore>().write().await.add_book(NewBook {
            title,
            published,
            author,
            genres: genres.unwrap_or_default(),
        });
        ctx.forget_book_counts();
        Book::from(&book)
    }

    async fn edit_author(
        &self,
        ctx: &Context<'_>,
        name: String,
        set_born_to: Option<Year>,
    ) -> async_graphql::Result<Option<Author>> {
        let author = ctx
            .data_unchecked::<SharedStore>()
            .write()
            .await
            .edit_author(&name, set_born_to.as_ref().map(|year| &year.0))
            .map_err(|e| e.extend())?;
        Ok(author.as_ref().map(Author::from))
    }
}
