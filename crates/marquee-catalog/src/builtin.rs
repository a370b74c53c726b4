use marquee_models::Movie;

/// The bundled catalog. Ids are load-bearing: persisted collections and
/// custom lists reference them.
pub(crate) fn builtin_movies() -> Vec<Movie> {
    vec![
        Movie {
            id: 1,
            title: "The Matrix".to_string(),
            year: 1999,
            poster: "https://image.tmdb.org/t/p/w500/f89U3ADr1oiB1s9GkdPOEpXUk5H.jpg".to_string(),
            backdrop: "https://image.tmdb.org/t/p/w1280/f89U3ADr1oiB1s9GkdPOEpXUk5H.jpg".to_string(),
            overview: "A computer hacker learns from mysterious rebels about the true nature of his reality and his role in the war against its controllers.".to_string(),
            rating: 8.7,
        },
        Movie {
            id: 2,
            title: "Inception".to_string(),
            year: 2010,
            poster: "https://image.tmdb.org/t/p/w500/9gk7adHYeDvHkCSEqAvQNLV5Uge.jpg".to_string(),
            backdrop: "https://image.tmdb.org/t/p/w1280/9gk7adHYeDvHkCSEqAvQNLV5Uge.jpg".to_string(),
            overview: "A thief who steals corporate secrets through the use of dream-sharing technology is given the inverse task of planting an idea into the mind of a C.E.O.".to_string(),
            rating: 8.8,
        },
        Movie {
            id: 3,
            title: "Interstellar".to_string(),
            year: 2014,
            poster: "https://image.tmdb.org/t/p/w500/gEU2QniE6E77NI6lCU6MxlNBvIx.jpg".to_string(),
            backdrop: "https://image.tmdb.org/t/p/w1280/gEU2QniE6E77NI6lCU6MxlNBvIx.jpg".to_string(),
            overview: "A team of explorers travel through a wormhole in space in an attempt to ensure humanity's survival.".to_string(),
            rating: 8.6,
        },
        Movie {
            id: 4,
            title: "The Dark Knight".to_string(),
            year: 2008,
            poster: "https://image.tmdb.org/t/p/w500/qJ2tW6WMUDux911r6m7haRef0WH.jpg".to_string(),
            backdrop: "https://image.tmdb.org/t/p/w1280/qJ2tW6WMUDux911r6m7haRef0WH.jpg".to_string(),
            overview: "When the menace known as the Joker wreaks havoc and chaos on the people of Gotham, Batman must accept one of the greatest psychological and physical tests of his ability to fight injustice.".to_string(),
            rating: 9.0,
        },
        Movie {
            id: 5,
            title: "Pulp Fiction".to_string(),
            year: 1994,
            poster: "https://image.tmdb.org/t/p/w500/d5iIlFn5s0ImszYzBPb8JPIfbXD.jpg".to_string(),
            backdrop: "https://image.tmdb.org/t/p/w1280/d5iIlFn5s0ImszYzBPb8JPIfbXD.jpg".to_string(),
            overview: "The lives of two mob hitmen, a boxer, a gangster and his wife intertwine in four tales of violence and redemption.".to_string(),
            rating: 8.9,
        },
        Movie {
            id: 6,
            title: "Parasite".to_string(),
            year: 2019,
            poster: "https://image.tmdb.org/t/p/w500/7IiTTgloJzvGI1TAYymCfbfl3vT.jpg".to_string(),
            backdrop: "https://image.tmdb.org/t/p/w1280/7IiTTgloJzvGI1TAYymCfbfl3vT.jpg".to_string(),
            overview: "Greed and class discrimination threaten the newly formed symbiotic relationship between the wealthy Park family and the destitute Kim clan.".to_string(),
            rating: 8.6,
        },
        Movie {
            id: 7,
            title: "The Shawshank Redemption".to_string(),
            year: 1994,
            poster: "https://image.tmdb.org/t/p/w500/q6y0Go1tsGEsmtFryDOJo3dEmqu.jpg".to_string(),
            backdrop: "https://image.tmdb.org/t/p/w1280/q6y0Go1tsGEsmtFryDOJo3dEmqu.jpg".to_string(),
            overview: "Two imprisoned men bond over a number of years, finding solace and eventual redemption through acts of common decency.".to_string(),
            rating: 9.3,
        },
        Movie {
            id: 8,
            title: "Spirited Away".to_string(),
            year: 2001,
            poster: "https://image.tmdb.org/t/p/w500/39wmItIWsg5sZMyRUHLkWBcuVCM.jpg".to_string(),
            backdrop: "https://image.tmdb.org/t/p/w1280/39wmItIWsg5sZMyRUHLkWBcuVCM.jpg".to_string(),
            overview: "During her family's move to the suburbs, a sullen 10-year-old girl wanders into a world ruled by gods, witches, and spirits, and where humans are changed into beasts.".to_string(),
            rating: 8.6,
        },
        Movie {
            id: 9,
            title: "Avengers: Endgame".to_string(),
            year: 2019,
            poster: "https://image.tmdb.org/t/p/w500/or06FN3Dka5tukK1e9sl16pB3iy.jpg".to_string(),
            backdrop: "https://image.tmdb.org/t/p/w1280/or06FN3Dka5tukK1e9sl16pB3iy.jpg".to_string(),
            overview: "After the devastating events of Avengers: Infinity War, the Avengers assemble once more in order to reverse Thanos' actions and restore balance to the universe.".to_string(),
            rating: 8.4,
        },
        Movie {
            id: 10,
            title: "The Godfather".to_string(),
            year: 1972,
            poster: "https://image.tmdb.org/t/p/w500/3bhkrj58Vtu7enYsRolD1fZdja1.jpg".to_string(),
            backdrop: "https://image.tmdb.org/t/p/w1280/3bhkrj58Vtu7enYsRolD1fZdja1.jpg".to_string(),
            overview: "The aging patriarch of an organized crime dynasty transfers control of his clandestine empire to his reluctant son.".to_string(),
            rating: 9.2,
        },
    ]
}
