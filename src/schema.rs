table! {
    attendances (id) {
        id -> Int8,
        event_id -> Int8,
        gamer_id -> Int8,
    }
}

table! {
    events (id) {
        id -> Int8,
        title -> Varchar,
        date_time -> Timestamptz,
        location -> Varchar,
        organizer_id -> Int8,
        game_id -> Int8,
    }
}

table! {
    game_types (id) {
        id -> Int8,
        #[sql_name = "type"]
        type_ -> Varchar,
    }
}

table! {
    gamers (id) {
        id -> Int8,
        user_id -> Int8,
        bio -> Varchar,
    }
}

table! {
    games (id) {
        id -> Int8,
        title -> Varchar,
        maker -> Varchar,
        number_of_players -> Int4,
        skill_level -> Varchar,
        creator_id -> Int8,
        game_type_id -> Int8,
    }
}

table! {
    users (id) {
        id -> Int8,
        username -> Varchar,
        first_name -> Varchar,
        last_name -> Varchar,
        token -> Varchar,
    }
}

joinable!(attendances -> events (event_id));
joinable!(attendances -> gamers (gamer_id));
joinable!(events -> gamers (organizer_id));
joinable!(events -> games (game_id));
joinable!(games -> gamers (creator_id));
joinable!(games -> game_types (game_type_id));
joinable!(gamers -> users (user_id));

allow_tables_to_appear_in_same_query!(attendances, events, game_types, gamers, games, users,);
