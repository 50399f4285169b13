use cynic::{MutationBuilder as _, QueryBuilder as _};

use crate::client::{
    AddBook, AddBookVariables, AllAuthors, AllBooks, AllBooksVariables, Client, Counts,
    EditAuthor, EditAuthorVariables, Year,
};
use crate::store::LibraryStore;


fn start() -> (testserver::Server, Client) {
    let server = testserver::Server::with_store(LibraryStore::seeded().into_shared());
    let client = Client::new(server.url("/"));
    (server, client)
}

#[tokio::test]
async fn test_counts() {
    let (_server, client) = start();

    let res = client.run(Counts::build(())).await.data.unwrap();

    assert_eq!(res.book_count, 7);
    assert_eq!(res.author_count, 5);
}

#[tokio::test]
async fn test_all_books_by_author_and_genre() {
    let (_server, client) = start();

    let query = AllBooks::build(AllBooksVariables {
        author: Some("Fyodor Dostoevsky".into()),
        genre: Some("classic".into()),
    });
    let res = client.run(query).await.data.unwrap();

    let titles: Vec<_> = res.all_books.iter().map(|book| book.title.as_str()).collect();
    assert_eq!(titles, ["Crime and punishment", "Demons"]);
}

#[tokio::test]
async fn test_all_books_unfiltered() {
    let (_server, client) = start();

    let res = client
        .run(AllBooks::build(AllBooksVariables::default()))
        .await
        .data
        .unwrap();

    assert_eq!(res.all_books.len(), 7);
    assert_eq!(res.all_books[0].title, "Clean Code");
    assert_eq!(res.all_books[0].genres, ["refactoring"]);
}

#[tokio::test]
async fn test_all_authors_with_book_counts() {
    let (_server, client) = start();

    let res = client.run(AllAuthors::build(())).await.data.unwrap();

    let counts: Vec<_> = res
        .all_authors
        .iter()
        .map(|author| (author.name.as_str(), author.book_count))
        .collect();
    assert_eq!(
        counts,
        [
            ("Robert Martin", 2),
            ("Martin Fowler", 1),
            ("Fyodor Dostoevsky", 2),
            ("Joshua Kerievsky", 1),
            ("Sandi Metz", 1),
        ]
    );
}

#[tokio::test]
async fn test_add_book_creates_author() {
    let (_server, client) = start();

    let mutation = AddBook::build(AddBookVariables {
        title: "New Book".into(),
        published: 2020,
        author: "New Author".into(),
        genres: Some(vec!["x".into()]),
    });
    let book = client.run(mutation).await.data.unwrap().add_book;
    assert_eq!(book.title, "New Book");
    assert_eq!(book.published, 2020);
    assert_eq!(book.genres, ["x"]);

    let counts = client.run(Counts::build(())).await.data.unwrap();
    assert_eq!(counts.book_count, 8);
    assert_eq!(counts.author_count, 6);

    let authors = client.run(AllAuthors::build(())).await.data.unwrap();
    let new_author = authors
        .all_authors
        .iter()
        .find(|author| author.name == "New Author")
        .unwrap();
    assert_eq!(new_author.born, None);
    assert_eq!(new_author.book_count, 1);
}

#[tokio::test]
async fn test_edit_author() {
    let (_server, client) = start();

    let mutation = EditAuthor::build(EditAuthorVariables {
        name: "Sandi Metz".into(),
        set_born_to: Some(Year(1963)),
    });
    let author = client.run(mutation).await.data.unwrap().edit_author.unwrap();
    assert_eq!(author.name, "Sandi Metz");
    assert_eq!(author.born, Some(1963));
    assert_eq!(author.book_count, 1);

    let mutation = EditAuthor::build(EditAuthorVariables {
        name: "Unknown".into(),
        set_born_to: Some(Year(1999)),
    });
    let res = client.run(mutation).await;
    assert!(res.errors.is_none());
    assert!(res.data.unwrap().edit_author.is_none());
}

#[tokio::test]
async fn test_edit_author_without_year_fails() {
    let (_server, client) = start();

    let mutation = EditAuthor::build(EditAuthorVariables {
        name: "Sandi Metz".into(),
        set_born_to: None,
    });
    let res = client.run(mutation).await;

    let errors = res.errors.unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "Invalid year");
}
