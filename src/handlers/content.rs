//! Static content handlers
//!
//! Each handler reads one item (fixed, random or date-derived) from the
//! content store and leaves the session untouched.

use std::path::PathBuf;
use chrono::NaiveDate;
use crate::content::{MediaItem, Opera, Quote};
use crate::routing::{Choice, DropReason, Event, HandlerContext, MediaKind, MediaSource, Outcome, Response};
use crate::state::Session;
use crate::utils::helpers::{callback_token, date_digit_sum};
use super::{indexed_item, labels};

pub fn biography(ctx: &HandlerContext<'_>, _event: &Event, session: &Session) -> Outcome {
    Outcome::reply(Response::text(ctx.content.biography()), session.clone())
}

/// Random fact with a "next" button
pub fn facts(ctx: &HandlerContext<'_>, _event: &Event, session: &Session) -> Outcome {
    reply_or_drop(random_fact(ctx), session)
}

/// "Next fact" pressed: replace the message in place
pub fn next_fact(ctx: &HandlerContext<'_>, _event: &Event, session: &Session) -> Outcome {
    reply_or_drop(random_fact(ctx).map(Response::edit_in_place), session)
}

fn random_fact(ctx: &HandlerContext<'_>) -> Option<Response> {
    let facts = ctx.content.list_facts();
    let fact = pick(ctx, facts)?;
    Some(Response::with_choices(
        fact.clone(),
        vec![Choice::new(labels::NEXT_FACT_BUTTON, labels::NEXT_FACT)],
    ))
}

pub fn quotes(ctx: &HandlerContext<'_>, _event: &Event, session: &Session) -> Outcome {
    reply_or_drop(random_quote(ctx), session)
}

pub fn next_quote(ctx: &HandlerContext<'_>, _event: &Event, session: &Session) -> Outcome {
    reply_or_drop(random_quote(ctx).map(Response::edit_in_place), session)
}

fn random_quote(ctx: &HandlerContext<'_>) -> Option<Response> {
    let quote = pick(ctx, ctx.content.list_quotes())?;
    Some(Response::with_choices(
        format_quote(quote),
        vec![Choice::new(labels::NEXT_QUOTE_BUTTON, labels::NEXT_QUOTE)],
    ))
}

fn pick<'a, T>(ctx: &HandlerContext<'_>, items: &'a [T]) -> Option<&'a T> {
    items.get(ctx.random.pick(items.len()))
}

fn reply_or_drop(response: Option<Response>, session: &Session) -> Outcome {
    match response {
        Some(response) => Outcome::reply(response, session.clone()),
        None => Outcome::Drop(DropReason::IndexOutOfRange),
    }
}

pub fn format_quote(quote: &Quote) -> String {
    format!("«{}»\n\n— {}", quote.text, quote.source)
}

/// List of audio recordings, one button each
pub fn audio_list(ctx: &HandlerContext<'_>, _event: &Event, session: &Session) -> Outcome {
    let choices = media_choices(ctx.content.list_audio(), labels::AUDIO_PREFIX);
    Outcome::reply(Response::with_choices(labels::AUDIO_PROMPT, choices), session.clone())
}

pub fn audio_item(ctx: &HandlerContext<'_>, event: &Event, session: &Session) -> Outcome {
    match indexed_item(event, labels::AUDIO_PREFIX, ctx.content.list_audio()) {
        Ok(item) => Outcome::reply(media_response(MediaKind::Audio, item), session.clone()),
        Err(reason) => Outcome::Drop(reason),
    }
}

pub fn photo_list(ctx: &HandlerContext<'_>, _event: &Event, session: &Session) -> Outcome {
    let choices = media_choices(ctx.content.list_photos(), labels::PHOTO_PREFIX);
    Outcome::reply(Response::with_choices(labels::PHOTO_PROMPT, choices), session.clone())
}

pub fn photo_item(ctx: &HandlerContext<'_>, event: &Event, session: &Session) -> Outcome {
    match indexed_item(event, labels::PHOTO_PREFIX, ctx.content.list_photos()) {
        Ok(item) => Outcome::reply(media_response(MediaKind::Photo, item), session.clone()),
        Err(reason) => Outcome::Drop(reason),
    }
}

fn media_choices(items: &[MediaItem], prefix: &str) -> Vec<Choice> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| Choice::new(item.title.clone(), callback_token(prefix, index)))
        .collect()
}

fn media_response(kind: MediaKind, item: &MediaItem) -> Response {
    let caption = format!("Назва: {}\nОпис: {}", item.title, item.description);
    let source = match (&item.local_path, &item.file_id) {
        (Some(path), _) => MediaSource::LocalFile(PathBuf::from(path)),
        (None, Some(file_id)) => MediaSource::RemoteId(file_id.clone()),
        // no usable file: caption only
        (None, None) => return Response::text(caption),
    };
    Response::media(kind, source, caption)
}

pub fn memorial_places(ctx: &HandlerContext<'_>, _event: &Event, session: &Session) -> Outcome {
    let mut text = String::from("Пам'ятні місця, пов'язані з Соломією Крушельницькою:\n\n");
    for place in ctx.content.list_memorial_places() {
        text.push_str(&format!(
            "📍 {}\n    {}\n    Адреса: {}\n\n",
            place.name, place.description, place.address
        ));
    }
    Outcome::reply(Response::text(text.trim_end()), session.clone())
}

pub fn timeline(ctx: &HandlerContext<'_>, _event: &Event, session: &Session) -> Outcome {
    let mut text = String::from("Хронологія життя Соломії Крушельницької:\n\n");
    for event in ctx.content.list_timeline_events() {
        text.push_str(&format!("{}: {}\n\n", event.date, event.description));
    }
    Outcome::reply(Response::text(text.trim_end()), session.clone())
}

/// Index of the opera shown on `date`: digit sum of `YYYY-MM-DD` modulo the
/// list length. Same for every user on a given day.
pub fn opera_index_for(date: NaiveDate, len: usize) -> usize {
    date_digit_sum(date) as usize % len
}

pub fn opera_of_the_day(ctx: &HandlerContext<'_>, _event: &Event, session: &Session) -> Outcome {
    let operas = ctx.content.list_operas();
    let opera = &operas[opera_index_for(ctx.clock.today(), operas.len())];
    Outcome::reply(Response::text(format_opera(opera)), session.clone())
}

pub fn format_opera(opera: &Opera) -> String {
    format!(
        "Опера дня: {}\n\nКомпозитор: {}\nРоль Соломії Крушельницької: {}\n\nІсторія: {}\n\nЦікавий факт: {}",
        opera.title, opera.composer, opera.role, opera.history, opera.fact
    )
}

pub fn museum_facts(ctx: &HandlerContext<'_>, _event: &Event, session: &Session) -> Outcome {
    let mut text = String::from("Історія та факти про будинок Соломії Крушельницької:\n\n");
    for fact in ctx.content.museum_facts() {
        text.push_str(&format!("• {}\n\n", fact));
    }
    Outcome::reply(Response::text(text.trim_end()), session.clone())
}

pub fn museum_directions(ctx: &HandlerContext<'_>, _event: &Event, session: &Session) -> Outcome {
    let directions = ctx.content.museum_directions();
    let mut text = String::from("Як дістатися до будинку-музею:\n\n");
    text.push_str(&format!("Адреса: {}\n\n", directions.address));
    text.push_str(&format!("Графік роботи: {}\n\n", directions.hours));
    text.push_str("Маршрут громадським транспортом:\n");
    for route in &directions.public_transport {
        text.push_str(&format!("• {}\n", route));
    }
    text.push_str(&format!("\nКонтактний телефон: {}", directions.phone));
    Outcome::reply(Response::text(text), session.clone())
}

pub fn museum_events(ctx: &HandlerContext<'_>, _event: &Event, session: &Session) -> Outcome {
    let events = ctx.content.museum_events();
    if events.is_empty() {
        return Outcome::reply(Response::text(labels::NO_MUSEUM_EVENTS), session.clone());
    }

    let mut text = String::from("Найближчі події у будинку-музеї Соломії Крушельницької:\n\n");
    for event in events {
        text.push_str(&format!("{} - {}\n{}\n\n", event.date, event.title, event.description));
    }
    Outcome::reply(Response::text(text.trim_end()), session.clone())
}
