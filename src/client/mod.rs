use cynic::http::ReqwestExt;
use cynic::serde;
use reqwest::Url;

pub struct Client {
    client: reqwest::Client,
    url: Url,
}

impl Client {
    pub fn new(url: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
        }
    }

    pub async fn run<Op, Input>(
        &self,
        op: cynic::Operation<Op, Input>,
    ) -> cynic::GraphQlResponse<Op>
    where
        Input: serde::Serialize,
        Op: serde::de::DeserializeOwned + 'static,
    {
        self.client
            .post(self.url.clone())
            .run_graphql(op)
            .await
            .unwrap()
    }
}

#[cynic::schema("library")]
mod schema {}

#[derive(cynic::Scalar, Debug, Clone)]
pub struct Year(pub i32);

#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "QueryRoot")]
pub struct Counts {
    pub book_count: i32,
    pub author_count: i32,
}

#[derive(cynic::QueryVariables, Debug, Default)]
pub struct AllBooksVariables {
    pub author: Option<String>,
    pub genre: Option<String>,
}

#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "QueryRoot", variables = "AllBooksVariables")]
pub struct AllBooks {
    #[arguments(author: $author, genre: $genre)]
    pub all_books: Vec<Book>,
}

#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "QueryRoot")]
pub struct AllAuthors {
    pub all_authors: Vec<Author>,
}

#[derive(cynic::QueryVariables, Debug)]
pub struct AddBookVariables {
    pub title: String,
    pub published: i32,
    pub author: String,
    pub genres: Option<Vec<String>>,
}

#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "MutationRoot", variables = "AddBookVariables")]
pub struct AddBook {
    #[arguments(title: $title, published: $published, author: $author, genres: $genres)]
    pub add_book: Book,
}

#[derive(cynic::QueryVariables, Debug)]
pub struct EditAuthorVariables {
    pub name: String,
    pub set_born_to: Option<Year>,
}

#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "MutationRoot", variables = "EditAuthorVariables")]
pub struct EditAuthor {
    #[arguments(name: $name, setBornTo: $set_born_to)]
    pub edit_author: Option<Author>,
}

#[derive(cynic::QueryFragment, Debug)]
pub struct Author {
    pub name: String,
    pub id: cynic::Id,
    pub born: Option<i32>,
    pub book_count: i32,
}

#[derive(cynic::QueryFragment, Debug)]
pub struct Book {
    pub title: String,
    pub published: i32,
    pub author: String,
    pub id: cynic::Id,
    pub genres: Vec<String>,
}
