use crate::bot::notifier::{Courier, InteractionCourier, Notifier};
use crate::bot::{Context, Error};
use crate::database::shifts::{ShiftError, ShiftStore};
use crate::utils::format::{
    format_already_checked_in, format_checked_in, format_checked_out, format_not_checked_in,
};
use crate::utils::time::{current_timestamp, format_datetime_utc};
use poise::serenity_prelude::{Mentionable, UserId};
use std::fmt::Display;
use tracing::{debug, error, info};

// Snowflakes stay below 2^63, so they fit the INTEGER column.
fn user_key(user_id: UserId) -> Result<i64, Error> {
    Ok(i64::try_from(user_id.get())?)
}

/// Start your shift
#[poise::command(slash_command)]
pub async fn checkin(ctx: Context<'_>) -> Result<(), Error> {
    let now = current_timestamp();
    let user_id = user_key(ctx.author().id)?;
    let data = ctx.data();

    run_checkin(
        &data.store,
        &data.notifier,
        &InteractionCourier::new(ctx),
        user_id,
        ctx.author().mention(),
        now,
    )
    .await
}

/// End your shift
#[poise::command(slash_command)]
pub async fn checkout(ctx: Context<'_>) -> Result<(), Error> {
    let now = current_timestamp();
    let user_id = user_key(ctx.author().id)?;
    let data = ctx.data();

    run_checkout(
        &data.store,
        &data.notifier,
        &InteractionCourier::new(ctx),
        user_id,
        ctx.author().mention(),
        now,
    )
    .await
}

pub async fn run_checkin<C: Courier>(
    store: &ShiftStore,
    notifier: &Notifier,
    courier: &C,
    user_id: i64,
    mention: impl Display,
    now: i64,
) -> Result<(), Error> {
    match store.begin(user_id, now).await {
        Ok(()) => {}
        Err(ShiftError::AlreadyCheckedIn { since }) => {
            info!("Rejected checkin for user_id={}: open since {}", user_id, since);
            courier
                .reply_ephemeral(&format_already_checked_in(since))
                .await?;
            return Ok(());
        }
        Err(e) => {
            error!("Checkin failed for user_id={}: {:?}", user_id, e);
            return Err(e.into());
        }
    }

    info!(
        "user_id={} checked in at {}",
        user_id,
        format_datetime_utc(now)
    );

    let delivery = notifier
        .notify(courier, &format_checked_in(mention, now))
        .await?;
    debug!("Checkin of user_id={} delivered as {:?}", user_id, delivery);

    Ok(())
}

pub async fn run_checkout<C: Courier>(
    store: &ShiftStore,
    notifier: &Notifier,
    courier: &C,
    user_id: i64,
    mention: impl Display,
    now: i64,
) -> Result<(), Error> {
    let record = match store.end(user_id, now).await {
        Ok(record) => record,
        Err(ShiftError::NotCheckedIn) => {
            info!("Rejected checkout for user_id={}: no open shift", user_id);
            courier.reply_ephemeral(&format_not_checked_in()).await?;
            return Ok(());
        }
        Err(e) => {
            error!("Checkout failed for user_id={}: {:?}", user_id, e);
            return Err(e.into());
        }
    };

    info!(
        "user_id={} checked out after {}s (record id={})",
        user_id, record.duration_seconds, record.id
    );

    let delivery = notifier
        .notify(courier, &format_checked_out(mention, record.duration()))
        .await?;
    debug!("Checkout of user_id={} delivered as {:?}", user_id, delivery);

    Ok(())
}
