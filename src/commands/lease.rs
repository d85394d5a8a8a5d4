use crate::*;

fn describe_config(c: &LeaseConfig) -> String {
    format!(
        "annual miles:      {}\nlease start date:  {}\nstarting odometer: {}",
        group_thousands(c.annual_miles as i128),
        format_date(c.start_date),
        group_thousands(c.start_odometer as i128)
    )
}

pub fn handle_lease_commands(cli: &Cli, today: NaiveDate) -> anyhow::Result<()> {
    let mut session = Session::open(today)?;

    match &cli.command {
        Commands::Status => {
            let report = StatusReport {
                screen: session.screen(),
                configured: session.config().is_some(),
                config: session.config().copied(),
                current_odometer: session.current_odometer(),
            };
            print_one(cli.json, report, |r| match &r.config {
                Some(c) => format!(
                    "screen: {}\n{}\ncurrent odometer:  {}",
                    r.screen.as_str(),
                    describe_config(c),
                    group_thousands(r.current_odometer.unwrap_or(c.start_odometer) as i128)
                ),
                None => format!(
                    "screen: {}\nno lease configured yet; run `milepace configure`",
                    r.screen.as_str()
                ),
            })?;
        }
        Commands::Configure {
            annual_miles,
            start_date,
            start_odometer,
        } => {
            let form = session.form(today);
            let config = LeaseConfig {
                annual_miles: annual_miles.unwrap_or(form.annual_miles),
                start_date: start_date.unwrap_or(form.start_date),
                start_odometer: start_odometer.unwrap_or(form.start_odometer),
            };
            session.save(config, today)?;
            session.commit_config()?;
            log::info!("saved lease config to {}", lease_path()?.display());

            let report = SavedReport {
                screen: session.screen(),
                config,
                current_odometer: session.current_odometer().unwrap_or(config.start_odometer),
            };
            print_one(cli.json, report, |r| {
                format!("configuration saved\n{}", describe_config(&r.config))
            })?;
        }
        Commands::Edit => {
            let form = session.edit()?;
            session.persist()?;
            let report = FormReport {
                screen: session.screen(),
                form,
                max_start_date: today,
            };
            print_one(cli.json, report, |r| {
                format!(
                    "editing lease configuration (run `milepace configure` to save)\n{}",
                    describe_config(&r.form)
                )
            })?;
        }
        Commands::Track { odometer } => {
            let clamped = match odometer {
                Some(reading) => session.set_odometer(*reading)?,
                None => false,
            };
            let metrics = session.metrics(today)?;
            session.persist()?;

            let config = session.config().copied().ok_or(LeaseError::NotConfigured)?;
            let current = session.current_odometer().unwrap_or(config.start_odometer);
            let report = TrackReport {
                today,
                config,
                current_odometer: current,
                clamped,
                display: display_metrics(&metrics),
                metrics,
            };
            print_one(cli.json, report, |r| {
                let mut out = String::new();
                if r.clamped {
                    out.push_str(&format!(
                        "reading raised to starting odometer {}\n",
                        group_thousands(r.config.start_odometer as i128)
                    ));
                }
                out.push_str(&format!(
                    "current odometer:  {}\n{}",
                    group_thousands(r.current_odometer as i128),
                    render_metrics(&r.display)
                ));
                out
            })?;
        }
    }

    Ok(())
}
