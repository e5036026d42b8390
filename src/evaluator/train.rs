//! The trial training loop

use super::{Evaluator, TrainReport, MAX_EPOCHS};
use crate::loss::{CrossEntropyLoss, LossFn};
use crate::metrics::AccuracyMeter;
use crate::model::Classifier;
use crate::optim::Optimizer;
use crate::{Batch, Result};

impl<M: Classifier, O: Optimizer> Evaluator<'_, M, O> {
    /// Train until the epoch cap or the plateau rule fires
    ///
    /// Each epoch runs one full optimizing pass over the training data and
    /// one gradient-free pass over the validation data, recording both
    /// accuracies. A strictly better validation accuracy overwrites the
    /// checkpoint slot. Returns the best validation accuracy observed and
    /// the epoch it occurred at.
    pub fn train(&mut self) -> Result<TrainReport> {
        let criterion = CrossEntropyLoss;
        let mut train_history: Vec<f32> = Vec::new();
        let mut val_history: Vec<f32> = Vec::new();
        let mut best_val_acc = 0.0_f32;
        let mut stop = None;

        println!(
            "Training on {} ({} train / {} val batches, batch size {})",
            self.device,
            self.train_data.len(),
            self.valid_data.len(),
            self.batch_size
        );

        for epoch in 0..MAX_EPOCHS {
            let train_acc = self.train_epoch(&criterion);
            train_history.push(train_acc);

            let val_acc = self.eval_pass(self.valid_data);
            if val_acc > best_val_acc {
                best_val_acc = val_acc;
                self.checkpoint.save(&self.model.state())?;
            }
            val_history.push(val_acc);

            stop = self.stopping.check(epoch, &train_history, &val_history);

            self.schedule.apply(epoch, &mut self.optimizer);

            println!(
                "Epoch {}, Train accuracy: {train_acc:.3}, Val accuracy: {val_acc:.3}",
                epoch + 1
            );

            if let Some(reason) = stop {
                println!("> Stopping early: {reason}");
                break;
            }
        }
        println!("> Finished Training");

        let (best_epoch, best_val_acc) = best_validation_epoch(&val_history);
        println!(
            "Best validation accuracy and corresponding epoch number: {best_val_acc:.3}/{}",
            best_epoch + 1
        );

        Ok(TrainReport {
            best_val_acc,
            best_epoch,
            epochs_run: val_history.len(),
            stop,
            train_acc_history: train_history,
            val_acc_history: val_history,
        })
    }

    /// One optimizing pass over the training data
    fn train_epoch(&mut self, criterion: &CrossEntropyLoss) -> f32 {
        self.model.set_training(true);
        let mut meter = AccuracyMeter::new();
        for batch in self.train_data {
            self.optimizer.zero_grad(self.model.parameters_mut());
            let logits = self.model.forward(&batch.inputs);
            let grad = criterion.gradient(&logits, &batch.targets);
            self.model.backward(&grad);
            self.optimizer.step(self.model.parameters_mut());
            meter.update(&logits, &batch.targets);
        }
        meter.percent()
    }

    /// One gradient-free scoring pass
    pub(super) fn eval_pass(&mut self, data: &[Batch]) -> f32 {
        self.model.set_training(false);
        let mut meter = AccuracyMeter::new();
        for batch in data {
            let logits = self.model.forward(&batch.inputs);
            meter.update(&logits, &batch.targets);
        }
        meter.percent()
    }
}

/// First index of the maximum validation accuracy, with its value
fn best_validation_epoch(val_history: &[f32]) -> (usize, f32) {
    let mut best_epoch = 0;
    let mut best = 0.0_f32;
    for (epoch, &acc) in val_history.iter().enumerate() {
        if acc > best {
            best = acc;
            best_epoch = epoch;
        }
    }
    (best_epoch, best)
}
